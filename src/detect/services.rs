use async_trait::async_trait;
use rand::{seq::SliceRandom, Rng};

use crate::detect::dto::{CropReport, DiseaseReport, Verdict};

pub const CANNED_RESULT: &str = "✅ Healthy Crop Detected";
pub const DEMO_MODE: &str = "Demo AI";

pub const CROP_CLASSES: [&str; 7] = [
    "Wheat",
    "Rice",
    "Maize",
    "Sugarcane",
    "Cotton",
    "Potato",
    "Tomato",
];

/// Disease classes paired with their treatment advice.
pub const DISEASES: [(&str, &str); 6] = [
    (
        "Healthy",
        "Your plant looks healthy! Maintain watering & add compost every 15 days.",
    ),
    (
        "Leaf Blight",
        "Spray Mancozeb or Chlorothalonil. Remove affected leaves.",
    ),
    ("Rust", "Use Sulfur spray. Avoid overhead irrigation."),
    (
        "Leaf Spot",
        "Use Neem oil or Copper fungicide. Improve air flow.",
    ),
    (
        "Mosaic Virus",
        "No cure. Remove infected plants + control insects.",
    ),
    (
        "Bacterial Wilt",
        "Improve drainage. Apply bleaching powder in water channels.",
    ),
];

/// Demo confidences are drawn from this half-open range.
pub const DEMO_CONFIDENCE: std::ops::Range<f64> = 0.82..0.98;

/// Image inference behind `/detect`.
#[async_trait]
pub trait Detector: Send + Sync {
    async fn detect(&self, image: Option<&serde_json::Value>) -> Verdict;
}

/// Ignores its input and always reports a healthy crop.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedDetector;

#[async_trait]
impl Detector for CannedDetector {
    async fn detect(&self, _image: Option<&serde_json::Value>) -> Verdict {
        Verdict {
            result: CANNED_RESULT.to_string(),
        }
    }
}

pub fn classify_crop<R: Rng + ?Sized>(rng: &mut R) -> CropReport {
    let crop = CROP_CLASSES.choose(rng).copied().unwrap_or(CROP_CLASSES[0]);
    CropReport {
        crop: crop.to_string(),
        confidence: rng.gen_range(DEMO_CONFIDENCE),
        mode: DEMO_MODE.to_string(),
    }
}

pub fn classify_disease<R: Rng + ?Sized>(rng: &mut R) -> DiseaseReport {
    let (disease, solution) = DISEASES.choose(rng).copied().unwrap_or(DISEASES[0]);
    DiseaseReport {
        disease: disease.to_string(),
        confidence: rng.gen_range(DEMO_CONFIDENCE),
        solution: solution.to_string(),
        mode: DEMO_MODE.to_string(),
    }
}
