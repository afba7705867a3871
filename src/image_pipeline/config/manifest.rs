//! The fixed set of placeholder assets for the website mockup

/// How an asset is decorated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// One large glow centred on the canvas, bigger label
    Logo,
    /// Centre glow plus three randomly placed accents
    Illustration,
}

/// A single placeholder image to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSpec {
    /// File name inside the output directory
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    /// Text drawn in the middle of the image; may contain `\n`
    pub label: String,
    pub kind: AssetKind,
}

impl AssetSpec {
    pub fn logo(file_name: impl Into<String>, width: u32, height: u32, label: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            width,
            height,
            label: label.into(),
            kind: AssetKind::Logo,
        }
    }

    pub fn illustration(
        file_name: impl Into<String>,
        width: u32,
        height: u32,
        label: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            width,
            height,
            label: label.into(),
            kind: AssetKind::Illustration,
        }
    }

    pub fn is_logo(&self) -> bool {
        self.kind == AssetKind::Logo
    }
}

const SERVICE_SIZE: (u32, u32) = (800, 600);

const SERVICES: [(&str, &str); 6] = [
    ("service_1.png", "RCM Optimization"),
    ("service_2.png", "API Integration"),
    ("service_3.png", "Smart Claims AI"),
    ("service_4.png", "Eligibility Bots"),
    ("service_5.png", "Medical OCR"),
    ("service_6.png", "Cashflow Analytics"),
];

const SHOWCASES: [(&str, &str); 2] = [
    ("showcase_1.png", "Dashboard View"),
    ("showcase_2.png", "Mobile App"),
];

/// Logo, hero, six service cards and two showcase shots, in generation order.
pub fn default_manifest() -> Vec<AssetSpec> {
    let (w, h) = SERVICE_SIZE;
    let mut assets = vec![
        AssetSpec::logo("logo.png", 512, 512, "Care Tech"),
        AssetSpec::illustration("hero_visual.png", 1200, 1200, "Future of Health\nAutomation"),
    ];
    assets.extend(
        SERVICES
            .iter()
            .chain(SHOWCASES.iter())
            .map(|(file, label)| AssetSpec::illustration(*file, w, h, *label)),
    );
    assets
}
