/// A body shape offered on the onboarding screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const BODY_TYPES: &[BodyType] = &[
    BodyType {
        id: "hourglass",
        name: "Hourglass",
        description: "Waist is the narrowest part of frame",
    },
    BodyType {
        id: "triangle",
        name: "Triangle",
        description: "Hips are broader than shoulders",
    },
    BodyType {
        id: "rectangle",
        name: "Rectangle",
        description: "Hips, shoulders & waist are the same proportion",
    },
    BodyType {
        id: "oval",
        name: "Oval",
        description: "Hips & shoulders are narrower than waist",
    },
    BodyType {
        id: "heart",
        name: "Heart",
        description: "Hips are narrower than shoulders",
    },
];

pub const STYLE_OPTIONS: &[&str] = &[
    "Y2K",
    "Casual",
    "Street",
    "Cottage",
    "Sporty",
    "Minimal",
    "Bold",
    "Layering",
    "Grunge",
    "Cozy",
    "Vintage",
    "Cyber",
    "Clean Girl",
    "Coquette",
];

pub const PAST_OCCASIONS: &[&str] = &["Y2K House Party", "School", "Formal", "Picnic", "Date"];
