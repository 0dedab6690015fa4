//! Static copy and tables rendered by every landing page variant.

pub const PRODUCT_NAME: &str = "Content Creator Copilot";

/// Backdrop of the flat hero.
pub const HERO_IMAGE: &str = "https://lh3.googleusercontent.com/aida-public/AB6AXuBiWDcej21qxERmWt1qAzzKAdnNDy4PG2IQvDida4Mgj7PQ3kZCDB_KpolRiS2mYXkTmo7bRTE_j2AOGW-5bZMukcSaNxQ3n1mPtA3MokjCZVbHoKoDF1kRSocbMvui_WM1ybgvwR11NJ9g2TPekcmU3s_aUTfRrwK6HDhkovpnKD0RVkLlJ0mk4u8ybbhKyWnpcqZNy5fkbTHrvBFrlA7XNIPq4FkzrTYiTjgO78LGN76qc3mZUV32xqrepAq0pDP-7mCbOjUVQwvJ";

/// Wraps an image URL for an inline `background-image` style.
pub fn background_image(url: &str) -> String {
    format!("background-image: url(\"{}\");", url)
}

/// One stage of the content pipeline. Table order is display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub icon: &'static str,
    pub label: &'static str,
}

pub const WORKFLOW_STEPS: &[Step] = &[
    Step { icon: "lightbulb", label: "Idea" },
    Step { icon: "face", label: "Style Profile" },
    Step { icon: "article", label: "Content Plan" },
    Step { icon: "record_voice_over", label: "Voiceover" },
    Step { icon: "graphic_eq", label: "Transcription" },
    Step { icon: "closed_caption", label: "Captions" },
    Step { icon: "download", label: "Export" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Platform {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const PLATFORMS: &[Platform] = &[
    Platform { name: "Reels", icon: "photo_camera" },
    Platform { name: "Shorts", icon: "play_circle" },
    Platform { name: "YouTube", icon: "smart_display" },
    Platform { name: "TikTok", icon: "music_note" },
    Platform { name: "LinkedIn", icon: "work" },
    Platform { name: "Twitter", icon: "tag" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoreTool {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub cta: &'static str,
    pub image: &'static str,
}

pub const CORE_TOOLS: &[CoreTool] = &[
    CoreTool {
        icon: "graphic_eq",
        title: "Whisper Transcription",
        blurb: "Flawless audio-to-text with high-detail precision and noise isolation.",
        cta: "Explore Whisper",
        image: "https://lh3.googleusercontent.com/aida-public/AB6AXuDUVi_znlflg_LmFTJt6GkrcYn_3tFfdMrn-DCzpWRB3oydnw933LMaYEGWdW4dI7eIjDPa43xG70x9A-9R0_lxMBmYSGA9hZRrQ_RaqkD2vyfAZWIJEY98-9TCAvpqJCFS3sW3X1ZdAJ3rtyDz7GTo1DVy9WbMY5AZU1vBBi0xGhKgpTa35qjPdr6EDhSUGDDJb6lC1md6TBnLWldKWOxYmPZAcXjtoUhjntlxOmTcSrMQkrB1OVJX8EYU71IUusLeUuPyqwM_DfrE",
    },
    CoreTool {
        icon: "record_voice_over",
        title: "TTS Voiceover",
        blurb: "Human-grade AI voices across 40+ languages.",
        cta: "Try Voiceover",
        image: "https://lh3.googleusercontent.com/aida-public/AB6AXuAYsummO5izRBfm_TwzyGkmOTm-dzjwIiVRKl0p4TCv1UkcBekkm7LVva2FwoVL9FI6M8ABmQkgnrXXyux79G_neWD-SIdW2Uy3Gk1Z7kbCye8t-iLyrFXmdqlvm197GKpAAcn4MKW1jeUCewFyZIRu-MJJtQA2hv7A-aunpKY0RYxKt-0Ia6r7qKqcWzzbx2gKkC3nQmoE-zGBnpOLEoIJsJvtdLgHM3eHBv_qNhxrg7pJyKnowmwBgTNLTYKUiZg6oSSV8WwwreV9",
    },
    CoreTool {
        icon: "auto_fix_high",
        title: "GPT Scripting",
        blurb: "From idea to storyboard with one prompt.",
        cta: "Generate Scripts",
        image: "https://lh3.googleusercontent.com/aida-public/AB6AXuBGLGzT0wEOwlIS9BwYWPeDiMaRN_ymp2IEWagAZ2CrqBbc6ITy_T5yxyCTW9hKdJj0y3u6PK4d2RcxoPklYVUGOzLDVXuGbDwImpLp8q3HuTTrYgStNUc7cewy9_Z8hB84B8mduRo8q8Y7jsPuRaWOr4DR0l9_nGYQ-nTzzioVRoE6-GiOHVCCgTUxO7RH0HqoVN8L47TOMsblHN4W4GPCXJXV5sCJVN3gA9tkiVlcFblVIFE_MPb_0ZGldvMewuRqjretnTbQKSoK",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature { icon: "domain", title: "Multi-Tenancy", desc: "Isolated workspaces" },
    Feature { icon: "group", title: "Team RBAC", desc: "Owner, Admin, Editor" },
    Feature { icon: "payments", title: "Tiered Billing", desc: "Usage metering" },
    Feature { icon: "analytics", title: "Analytics", desc: "Usage insights" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

impl PricingPlan {
    pub fn is_trial(&self) -> bool {
        self.price == "$0"
    }

    pub fn cta_label(&self) -> &'static str {
        if self.is_trial() {
            "Start Free"
        } else {
            "Get Started"
        }
    }
}

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Free Trial",
        price: "$0",
        features: &["3 projects", "3 seats", "Basic support"],
        popular: false,
    },
    PricingPlan {
        name: "Creator",
        price: "$29/mo",
        features: &["Unlimited projects", "5 seats", "Priority support"],
        popular: true,
    },
    PricingPlan {
        name: "Team",
        price: "$79/mo",
        features: &["Unlimited projects", "15 seats", "Dedicated support"],
        popular: false,
    },
];

/// A scroll-driven panel (lens chapters, filmstrip frames).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chapter {
    pub kicker: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const CHAPTERS: &[Chapter] = &[
    Chapter {
        kicker: "01 / Capture",
        title: "Start with a spark",
        body: "Drop in a rough idea. Copilot learns your style profile and drafts a content plan around it.",
    },
    Chapter {
        kicker: "02 / Focus",
        title: "Script in your voice",
        body: "GPT scripting turns the plan into a storyboard, then TTS renders a voiceover that sounds like you.",
    },
    Chapter {
        kicker: "03 / Develop",
        title: "Captions without the grind",
        body: "Whisper transcribes every take and burns in captions timed to the word.",
    },
    Chapter {
        kicker: "04 / Print",
        title: "Export everywhere",
        body: "One click packs Reels, Shorts, TikTok and long-form cuts with the right ratios and lengths.",
    },
];

pub const HEADLINE_PHRASES: &[&str] = &[
    "Video Packages",
    "Scripts & Voiceovers",
    "Captioned Shorts",
    "Export-Ready Reels",
];
