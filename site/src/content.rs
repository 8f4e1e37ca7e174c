//! Static copy rendered by the landing page sections.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const BRAND: &str = "KWIKCNC";
pub const HEADLINE: &str = "CNC MACHINING ON STEROIDS";
pub const HEADLINE_HIGHLIGHT: &str = "STEROIDS";
pub const SUPPORTING_LINE: &str = "Because in the era of idea to app in mins Manufacturing shouldn't take weeks";
pub const WHO_ARE_YOU: &str = "Who Are You?";

/// One card in the scrolling story strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: &'static str,
    pub image: &'static str,
}

pub static STORIES: [Story; 10] = [
    Story {
        id: "story-1",
        title: "Precision Engineering",
        description: "From concept to creation, our CNC machines deliver unmatched precision in every cut, ensuring your parts meet the tightest tolerances.",
        kind: "Manufacturing",
        image: "/images/1.png",
    },
    Story {
        id: "story-2",
        title: "Rapid Prototyping",
        description: "Turn your ideas into reality in days, not weeks. Our advanced CNC technology accelerates your product development cycle.",
        kind: "Development",
        image: "/images/2.png",
    },
    Story {
        id: "story-3",
        title: "Material Mastery",
        description: "From aluminum to titanium, our CNC machines handle diverse materials with expertise, delivering consistent results across all projects.",
        kind: "Materials",
        image: "/images/3.png",
    },
    Story {
        id: "story-4",
        title: "Smart Manufacturing",
        description: "AI-powered optimization and real-time monitoring ensure maximum efficiency and minimal waste in every production run.",
        kind: "Technology",
        image: "/images/4.png",
    },
    Story {
        id: "story-5",
        title: "Quality Assurance",
        description: "Every part undergoes rigorous quality checks using advanced measurement systems, guaranteeing perfection in every delivery.",
        kind: "Quality",
        image: "/images/5.png",
    },
    Story {
        id: "story-6",
        title: "Custom Solutions",
        description: "Every project is unique. Our team works closely with you to deliver custom CNC solutions tailored to your specific requirements.",
        kind: "Service",
        image: "/images/1.png",
    },
    Story {
        id: "story-7",
        title: "Advanced Tooling",
        description: "State-of-the-art cutting tools and techniques ensure superior surface finishes and dimensional accuracy.",
        kind: "Technology",
        image: "/images/2.png",
    },
    Story {
        id: "story-8",
        title: "Production Scale",
        description: "From single prototypes to high-volume production runs, we scale with your business needs.",
        kind: "Manufacturing",
        image: "/images/3.png",
    },
    Story {
        id: "story-9",
        title: "Industry Expertise",
        description: "Decades of experience serving aerospace, automotive, medical, and industrial sectors.",
        kind: "Experience",
        image: "/images/4.png",
    },
    Story {
        id: "story-10",
        title: "Future Ready",
        description: "Continuous investment in cutting-edge technology keeps us at the forefront of manufacturing innovation.",
        kind: "Innovation",
        image: "/images/5.png",
    },
];

/// How a spec card renders its headline figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecValue {
    /// Shown verbatim.
    Fixed(&'static str),
    /// Counted up from zero, then followed by `suffix`.
    Counted { end: u32, suffix: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spec {
    pub label: &'static str,
    pub value: SpecValue,
    pub unit: &'static str,
    pub icon: &'static str,
}

pub static SPECS: [Spec; 4] = [
    Spec { label: "Precision", value: SpecValue::Fixed("±0.001"), unit: "inches", icon: "⚡" },
    Spec { label: "Speed", value: SpecValue::Counted { end: 24, suffix: "" }, unit: "hr turnaround", icon: "🚀" },
    Spec { label: "Materials", value: SpecValue::Counted { end: 50, suffix: "+" }, unit: "certified", icon: "🔧" },
    Spec { label: "Capacity", value: SpecValue::Counted { end: 10, suffix: "k" }, unit: "parts/month", icon: "⚙️" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Machine {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
}

pub static MACHINES: [Machine; 3] = [
    Machine {
        title: "5-AXIS MILLS",
        description: "Complex geometries with single setup precision",
        features: ["±0.0001\" tolerance", "Titanium capable", "Automated tool changes"],
    },
    Machine {
        title: "SWISS LATHES",
        description: "High-volume production with exceptional quality",
        features: ["Live tooling", "Sub-spindle operations", "Bar feeding"],
    },
    Machine {
        title: "EDM SYSTEMS",
        description: "Intricate patterns and tight tolerances",
        features: ["Wire & sinker EDM", "Hardened materials", "Complex contours"],
    },
];

/// Processes listed on the ruler carousel.
pub static PROCESSES: [&str; 6] = ["MILLING", "TURNING", "EDM", "GRINDING", "DRILLING", "FINISHING"];

/// Visitor paths offered by the "Who Are You?" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Audience {
    pub title: &'static str,
    pub icon: &'static str,
}

pub static AUDIENCES: [Audience; 2] = [
    Audience { title: "I want CNC machined Parts", icon: "🔧" },
    Audience { title: "I provide CNC machining services", icon: "🏭" },
];
