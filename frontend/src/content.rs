//! Copy, links and images shown on the page.

pub const BRAND: &str = "Igloo";
pub const TAGLINE: &str = "Building the future of onchain communities";
pub const COPYRIGHT: &str = "\u{a9} 2025 Igloo Inc. All rights reserved.";
pub const LOADING_MARK: &str = "===++";

pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
}

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Community", href: "#community" },
    NavLink { label: "Technology", href: "#technology" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const HEADER_CTA: &str = "Join Community";

pub const HERO_IMAGE: Image = Image {
    src: "https://images.unsplash.com/photo-1639762681485-074b7f938ba0",
    alt: "Blockchain Technology",
};
pub const HERO_SUBTITLE: &str =
    "Our mission is to create the largest onchain community, driving the consumer crypto revolution.";

pub const ABOUT_IMAGE: Image = Image {
    src: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b",
    alt: "Blockchain Development",
};
pub const ABOUT_TEXT: &str = "At Igloo, we're pioneering the next generation of blockchain infrastructure, \
    creating seamless experiences for developers and users alike. Our platform \
    combines cutting-edge technology with user-friendly interfaces to make \
    decentralized applications accessible to everyone.";

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "1M+", label: "Active Users" },
    Stat { value: "50+", label: "Blockchain Networks" },
    Stat { value: "99.9%", label: "Uptime" },
];

pub const COMMUNITY_IMAGE: Image = Image {
    src: "https://images.pexels.com/photos/32623477/pexels-photo-32623477.jpeg",
    alt: "Crypto Community",
};
pub const COMMUNITY_SUBTITLE: &str =
    "Be part of the largest onchain community driving the future of decentralized finance";

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Decentralized Governance",
        description: "Community-driven decisions through transparent voting mechanisms",
        icon: "\u{1f3db}\u{fe0f}",
    },
    Feature {
        title: "Reward System",
        description: "Earn tokens for active participation and valuable contributions",
        icon: "\u{1f48e}",
    },
    Feature {
        title: "Developer Tools",
        description: "Comprehensive SDKs and APIs for seamless integration",
        icon: "\u{1f6e0}\u{fe0f}",
    },
    Feature {
        title: "Global Network",
        description: "Connect with crypto enthusiasts from around the world",
        icon: "\u{1f30d}",
    },
];

pub const TECHNOLOGY_IMAGE: Image = Image {
    src: "https://images.unsplash.com/photo-1488229297570-58520851e868",
    alt: "Digital Innovation",
};
pub const TECHNOLOGY_TEXT: &str = "Our advanced blockchain infrastructure is designed for scalability, \
    security, and seamless user experience. Built from the ground up \
    to handle enterprise-level applications while maintaining decentralization.";

pub struct TechSpec {
    pub label: &'static str,
    pub value: &'static str,
}

pub const TECH_SPECS: &[TechSpec] = &[
    TechSpec { label: "Consensus Algorithm", value: "Proof of Stake" },
    TechSpec { label: "Block Time", value: "2.5 seconds" },
    TechSpec { label: "Transaction Throughput", value: "10,000+ TPS" },
    TechSpec { label: "Smart Contract Language", value: "Solidity, Rust" },
    TechSpec { label: "Interoperability", value: "Cross-chain bridges" },
    TechSpec { label: "Security", value: "Military-grade encryption" },
];

pub struct SocialLink {
    pub label: &'static str,
    pub glyph: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Twitter", glyph: "\u{1f4f1}" },
    SocialLink { label: "Discord", glyph: "\u{1f4ac}" },
    SocialLink { label: "Telegram", glyph: "\u{1f4de}" },
    SocialLink { label: "GitHub", glyph: "\u{1f4bb}" },
];

pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_GROUPS: &[LinkGroup] = &[
    LinkGroup {
        title: "Platform",
        links: &["Documentation", "API Reference", "Developer Tools", "Status"],
    },
    LinkGroup {
        title: "Community",
        links: &["Discord", "Telegram", "Forums", "Events"],
    },
    LinkGroup {
        title: "Resources",
        links: &["Whitepaper", "Blog", "Research", "Support"],
    },
];

pub const LEGAL_LINKS: &[&str] = &["Privacy Policy", "Terms of Service", "Cookie Policy"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_targets_exist_as_section_ids() {
        let hrefs: Vec<&str> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(hrefs, vec!["#about", "#community", "#technology", "#contact"]);
    }

    #[test]
    fn images_are_absolute_https_urls() {
        for image in [&HERO_IMAGE, &ABOUT_IMAGE, &COMMUNITY_IMAGE, &TECHNOLOGY_IMAGE] {
            assert!(image.src.starts_with("https://"), "{}", image.src);
            assert!(!image.alt.is_empty());
        }
    }

    #[test]
    fn tables_have_expected_sizes() {
        assert_eq!(STATS.len(), 3);
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(TECH_SPECS.len(), 6);
        assert_eq!(SOCIAL_LINKS.len(), 4);
        assert!(FOOTER_GROUPS.iter().all(|g| g.links.len() == 4));
    }
}
