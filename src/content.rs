// src/content.rs
// Literal copy for the "How It Works" page.

use crate::icons::Icon;

pub const BRAND: &str = "Trace the Change";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const HOW_IT_WORKS_PATH: &str = "/how-it-works";
pub const CHARITIES_PATH: &str = "/charities";
pub const ABOUT_US_PATH: &str = "/about-us";

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { href: "/", label: "Home" },
    NavLink { href: HOW_IT_WORKS_PATH, label: "How It Works" },
    NavLink { href: CHARITIES_PATH, label: "Charities" },
    NavLink { href: ABOUT_US_PATH, label: "About Us" },
];

pub const CONTACT_LINK: NavLink = NavLink { href: ABOUT_US_PATH, label: "Contact" };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStepData {
    pub number: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const PROCESS_STEPS: [ProcessStepData; 4] = [
    ProcessStepData {
        number: 1,
        title: "Make a Donation",
        description: "Choose a charity and make a donation through our secure platform. Each donation is assigned a unique identifier on the blockchain.",
        icon: Icon::Wallet,
    },
    ProcessStepData {
        number: 2,
        title: "Blockchain Verification",
        description: "Your donation is recorded on the blockchain, creating an immutable record that cannot be altered or deleted.",
        icon: Icon::ShieldCheck,
    },
    ProcessStepData {
        number: 3,
        title: "Fund Distribution",
        description: "The charity receives your donation, and each transaction in the distribution process is recorded on the blockchain.",
        icon: Icon::ArrowRight,
    },
    ProcessStepData {
        number: 4,
        title: "Impact Tracking",
        description: "Track how your donation is being used in real-time. Charities provide updates on projects and outcomes that are linked to your donation.",
        icon: Icon::CheckCircle,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: [FaqEntry; 6] = [
    FaqEntry {
        question: "How do you verify charities?",
        answer: "We conduct thorough due diligence on all partner charities, including legal status verification, financial audits, and impact assessment. Only verified organizations can receive donations through our platform.",
    },
    FaqEntry {
        question: "Can I see exactly how my donation is used?",
        answer: "Yes! Our blockchain tracking allows you to see each step of your donation's journey, from your initial contribution to the specific projects and outcomes it funds.",
    },
    FaqEntry {
        question: "What blockchain technology do you use?",
        answer: "We use a combination of public and private blockchain technologies to ensure both transparency and efficiency. Our system is built on established protocols with proven security records.",
    },
    FaqEntry {
        question: "How do you protect donor privacy?",
        answer: "While transactions are recorded on the blockchain, personal donor information is encrypted and protected. Donors can choose to remain anonymous while still tracking their donation's impact.",
    },
    FaqEntry {
        question: "Are donations tax-deductible?",
        answer: "Yes, donations made through our platform to eligible charities are tax-deductible. You will receive a tax receipt for your contributions.",
    },
    FaqEntry {
        question: "What fees do you charge?",
        answer: "We charge a small platform fee of 2% to cover operational costs. 100% of the remaining donation goes directly to your chosen charity, and you can track every penny.",
    },
];

pub const HERO_TITLE: &str = "How Blockchain Transparency Works";
pub const HERO_SUBTITLE: &str = "Trace the Change uses cutting-edge blockchain technology to provide complete transparency in charitable giving. Here's how we track every dollar of your donation from start to impact.";

pub const TECH_TITLE: &str = "Blockchain Technology";
pub const TECH_INTRO: &str = "Our platform leverages blockchain technology to create a transparent and immutable record of all donations and their usage.";

pub const BENEFITS: [&str; 4] = [
    "Immutable records that cannot be altered",
    "Transparent transaction history",
    "Real-time tracking of fund distribution",
    "Secure and encrypted donation process",
];

pub const FAQ_TITLE: &str = "Frequently Asked Questions";
pub const FAQ_INTRO: &str = "Learn more about how our platform works and how we ensure transparency in charitable giving.";

pub const CTA_TITLE: &str = "Ready to Make a Difference?";
pub const CTA_TEXT: &str = "Start tracking your impact today with transparent, blockchain-verified donations.";
