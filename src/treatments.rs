use serde::Serialize;

use crate::labels::Label;

/// Care guidance for one diagnosed condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreatmentEntry {
    /// One-line condition summary shown with the diagnosis
    pub status: &'static str,
    /// Chemical treatment suggestion
    pub chemical: &'static str,
    /// Organic treatment suggestion
    pub organic: &'static str,
}

static CATALOG: [(Label, TreatmentEntry); Label::COUNT] = [
    (
        Label::HealthyLeaf,
        TreatmentEntry {
            status: "Your plant looks healthy!",
            chemical: "No treatment needed.",
            organic: "Maintain regular watering and sunlight exposure.",
        },
    ),
    (
        Label::TomatoEarlyBlight,
        TreatmentEntry {
            status: "Early Blight Detected.",
            chemical: "Use Mancozeb or Chlorothalonil spray.",
            organic: "Apply neem oil weekly and remove infected leaves.",
        },
    ),
    (
        Label::TomatoLateBlight,
        TreatmentEntry {
            status: "Late Blight Detected.",
            chemical: "Use copper-based fungicides.",
            organic: "Use baking soda spray and improve air circulation.",
        },
    ),
    (
        Label::PotatoLeafSpot,
        TreatmentEntry {
            status: "Leaf Spot Found.",
            chemical: "Apply Azoxystrobin fungicide.",
            organic: "Use compost tea and avoid overhead watering.",
        },
    ),
    (
        Label::AppleScab,
        TreatmentEntry {
            status: "Apple Scab Identified.",
            chemical: "Use Captan or Sulfur-based fungicide.",
            organic: "Prune infected leaves and use lime-sulfur spray.",
        },
    ),
    (
        Label::CornCommonRust,
        TreatmentEntry {
            status: "Common Rust Detected.",
            chemical: "Use Propiconazole-based fungicide.",
            organic: "Rotate crops and ensure good field sanitation.",
        },
    ),
];

// Served if a label were ever absent from the catalog. The catalog covers
// every variant, so this is unreachable in practice.
static NOT_AVAILABLE: TreatmentEntry = TreatmentEntry {
    status: "Analysis complete.",
    chemical: "N/A",
    organic: "N/A",
};

/// Returns the guidance for a diagnosed label. Total: every label resolves
/// to an entry.
pub fn treatment_for(label: Label) -> &'static TreatmentEntry {
    CATALOG
        .iter()
        .find(|(candidate, _)| *candidate == label)
        .map(|(_, entry)| entry)
        .unwrap_or(&NOT_AVAILABLE)
}
