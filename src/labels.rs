use serde::{Serialize, Serializer};
use std::fmt;

/// The closed set of conditions the classifier can report.
///
/// Variant order is fixed: `index()` values 0 through 5 line up with the
/// positions of the model's output scores, so reordering variants would
/// silently remap every prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    HealthyLeaf,
    TomatoEarlyBlight,
    TomatoLateBlight,
    PotatoLeafSpot,
    AppleScab,
    CornCommonRust,
}

impl Label {
    /// Number of known labels.
    pub const COUNT: usize = 6;

    /// All labels in model output order.
    pub const ALL: [Label; Label::COUNT] = [
        Label::HealthyLeaf,
        Label::TomatoEarlyBlight,
        Label::TomatoLateBlight,
        Label::PotatoLeafSpot,
        Label::AppleScab,
        Label::CornCommonRust,
    ];

    /// Returns the position of this label in the model's output vector.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the label at the given output position, if any.
    pub fn from_index(index: usize) -> Option<Label> {
        Label::ALL.get(index).copied()
    }

    /// Returns the human-readable class name.
    pub fn name(&self) -> &'static str {
        match self {
            Label::HealthyLeaf => "Healthy Leaf",
            Label::TomatoEarlyBlight => "Tomato - Early Blight",
            Label::TomatoLateBlight => "Tomato - Late Blight",
            Label::PotatoLeafSpot => "Potato - Leaf Spot",
            Label::AppleScab => "Apple - Scab",
            Label::CornCommonRust => "Corn - Common Rust",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for label in Label::ALL {
            assert_eq!(Label::from_index(label.index()), Some(label));
        }
    }

    #[test]
    fn test_all_ordering_matches_indices() {
        for (i, label) in Label::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
        }
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(Label::from_index(Label::COUNT), None);
        assert_eq!(Label::from_index(usize::MAX), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Label::HealthyLeaf.to_string(), "Healthy Leaf");
        assert_eq!(Label::TomatoEarlyBlight.to_string(), "Tomato - Early Blight");
        assert_eq!(Label::TomatoLateBlight.to_string(), "Tomato - Late Blight");
        assert_eq!(Label::PotatoLeafSpot.to_string(), "Potato - Leaf Spot");
        assert_eq!(Label::AppleScab.to_string(), "Apple - Scab");
        assert_eq!(Label::CornCommonRust.to_string(), "Corn - Common Rust");
    }

    #[test]
    fn test_serializes_as_display_name() {
        // The serialized form is the display string, not the variant name.
        let json = serde_json::to_string(&Label::TomatoEarlyBlight).unwrap();
        assert_eq!(json, "\"Tomato - Early Blight\"");

        for label in Label::ALL {
            assert_eq!(
                serde_json::to_string(&label).unwrap(),
                format!("\"{}\"", label.name())
            );
        }
    }
}
