//! Static lookup tables shared by the prediction handlers.
//!
//! All data here is baked in at compile time and read-only for the life of
//! the process: the crop label map for the recommendation classifier, the
//! disease class list and cause/cure text for the image classifier, and the
//! per-crop environmental tolerance table used by the weather advisor.

/// Crop names indexed by classifier label. Labels are 1-based.
pub const CROPS: [&str; 13] = [
    "maize", "sugarcane", "wheat", "cotton", "rice", "pulses", "millets",
    "mungbean", "blackgram", "lentil", "banana", "mango", "grapes",
];

/// Maps a raw classifier label to its crop name, if the label is known.
pub fn crop_for_label(label: i64) -> Option<&'static str> {
    if label < 1 {
        return None;
    }
    CROPS.get(label as usize - 1).copied()
}

/// Class labels of the plant-disease model, in output order.
pub const DISEASE_CLASSES: [&str; 11] = [
    "Apple___Apple_scab",
    "Apple___Black_rot",
    "Apple___Cedar_apple_rust",
    "Apple___healthy",
    "Grape___Black_rot",
    "Grape___Esca_(Black_Measles)",
    "Grape___Leaf_blight_(Isariopsis_Leaf_Spot)",
    "Grape___healthy",
    "Potato___Early_blight",
    "Potato___Late_blight",
    "Potato___healthy",
];

pub struct DiseaseInfo {
    pub cause: &'static str,
    pub cure: &'static str,
}

const DISEASE_INFO: [(&str, DiseaseInfo); 11] = [
    (
        "Apple___Apple_scab",
        DiseaseInfo {
            cause: "Fungal infection caused by Venturia inaequalis.",
            cure: "Apply fungicides like myclobutanil or sulfur-based sprays.",
        },
    ),
    (
        "Apple___Black_rot",
        DiseaseInfo {
            cause: "Fungal disease caused by Botryosphaeria obtusa.",
            cure: "Prune affected branches and apply copper-based fungicides.",
        },
    ),
    (
        "Apple___Cedar_apple_rust",
        DiseaseInfo {
            cause: "Fungal disease caused by Gymnosporangium juniperi-virginianae.",
            cure: "Remove nearby cedar trees and use fungicides containing myclobutanil.",
        },
    ),
    (
        "Apple___healthy",
        DiseaseInfo {
            cause: "No disease detected.",
            cure: "No action required. Keep monitoring for signs of disease.",
        },
    ),
    (
        "Grape___Black_rot",
        DiseaseInfo {
            cause: "Fungal infection caused by Guignardia bidwellii.",
            cure: "Use fungicides like mancozeb or captan. Prune infected parts.",
        },
    ),
    (
        "Grape___Esca_(Black_Measles)",
        DiseaseInfo {
            cause: "Complex fungal disease caused by Phaeomoniella chlamydospora.",
            cure: "Remove infected vines and apply appropriate fungicides.",
        },
    ),
    (
        "Grape___Leaf_blight_(Isariopsis_Leaf_Spot)",
        DiseaseInfo {
            cause: "Fungal infection caused by Isariopsis clavispora.",
            cure: "Use fungicides like chlorothalonil or mancozeb.",
        },
    ),
    (
        "Grape___healthy",
        DiseaseInfo {
            cause: "No disease detected.",
            cure: "No action required. Maintain good vineyard practices.",
        },
    ),
    (
        "Potato___Early_blight",
        DiseaseInfo {
            cause: "Fungal disease caused by Alternaria solani.",
            cure: "Apply fungicides like chlorothalonil. Rotate crops regularly.",
        },
    ),
    (
        "Potato___Late_blight",
        DiseaseInfo {
            cause: "Fungal disease caused by Phytophthora infestans.",
            cure: "Use fungicides like metalaxyl. Remove infected plants immediately.",
        },
    ),
    (
        "Potato___healthy",
        DiseaseInfo {
            cause: "No disease detected.",
            cure: "No action required. Monitor for signs of disease.",
        },
    ),
];

/// Cause/cure text for a disease class label.
pub fn disease_info(label: &str) -> Option<&'static DiseaseInfo> {
    DISEASE_INFO
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, info)| info)
}

/// Inclusive temperature and humidity tolerances for one crop.
pub struct CropConditions {
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity_min: f64,
    pub humidity_max: f64,
}

macro_rules! conditions {
    ($($crop:literal => $tmin:literal..$tmax:literal, $hmin:literal..$hmax:literal;)*) => {
        [$((
            $crop,
            CropConditions {
                temp_min: $tmin as f64,
                temp_max: $tmax as f64,
                humidity_min: $hmin as f64,
                humidity_max: $hmax as f64,
            },
        ),)*]
    };
}

/// Crop suitability tolerances, keyed by lowercase crop name.
pub const CROP_CONDITIONS: [(&str, CropConditions); 26] = conditions! {
    "wheat"      => 10..25, 40..70;
    "rice"       => 20..35, 60..90;
    "cotton"     => 25..40, 50..80;
    "maize"      => 18..30, 50..85;
    "sugarcane"  => 20..38, 60..85;
    "barley"     =>  5..20, 30..60;
    "sunflower"  => 15..30, 40..70;
    "millet"     => 20..35, 50..75;
    "gram"       => 10..25, 40..60;
    "mustard"    => 15..25, 30..55;
    "soybean"    => 20..30, 50..75;
    "peanuts"    => 25..35, 50..80;
    "banana"     => 20..35, 70..90;
    "orange"     => 15..30, 50..70;
    "apple"      =>  0..20, 40..60;
    "mango"      => 20..40, 60..85;
    "guava"      => 15..35, 50..75;
    "papaya"     => 22..35, 60..85;
    "watermelon" => 25..40, 50..80;
    "tomato"     => 18..30, 50..75;
    "potato"     =>  5..20, 40..60;
    "onion"      => 15..30, 50..70;
    "garlic"     => 10..25, 40..60;
    "carrot"     =>  5..20, 40..60;
    "spinach"    =>  5..20, 40..70;
    "cabbage"    =>  5..25, 40..70;
};

/// Case-insensitive lookup into [`CROP_CONDITIONS`].
pub fn crop_conditions(crop: &str) -> Option<&'static CropConditions> {
    let key = crop.to_lowercase();
    CROP_CONDITIONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, cond)| cond)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suitability {
    Suitable,
    PartiallySuitable,
    NotSuitable,
}

/// Applies the suitability rule: both ranges satisfied is suitable, exactly
/// one is partial, neither is unsuitable. Bounds are inclusive.
pub fn assess(cond: &CropConditions, temperature: f64, humidity: f64) -> Suitability {
    let temp_ok = cond.temp_min <= temperature && temperature <= cond.temp_max;
    let humidity_ok = cond.humidity_min <= humidity && humidity <= cond.humidity_max;
    match (temp_ok, humidity_ok) {
        (true, true) => Suitability::Suitable,
        (true, false) | (false, true) => Suitability::PartiallySuitable,
        (false, false) => Suitability::NotSuitable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_map_to_crop_names() {
        assert_eq!(crop_for_label(1), Some("maize"));
        assert_eq!(crop_for_label(3), Some("wheat"));
        assert_eq!(crop_for_label(13), Some("grapes"));
        assert_eq!(crop_for_label(0), None);
        assert_eq!(crop_for_label(14), None);
        assert_eq!(crop_for_label(-1), None);
    }

    #[test]
    fn healthy_apple_has_no_action_text() {
        let info = disease_info("Apple___healthy").unwrap();
        assert_eq!(info.cause, "No disease detected.");
        assert_eq!(
            info.cure,
            "No action required. Keep monitoring for signs of disease."
        );
    }

    #[test]
    fn unknown_disease_label_has_no_info() {
        assert!(disease_info("Tomato___mosaic_virus").is_none());
    }

    #[test]
    fn crop_lookup_is_case_insensitive() {
        assert!(crop_conditions("Wheat").is_some());
        assert!(crop_conditions("WHEAT").is_some());
        assert!(crop_conditions("quinoa").is_none());
    }

    #[test]
    fn suitability_bounds_are_inclusive() {
        let wheat = crop_conditions("wheat").unwrap();
        assert_eq!(assess(wheat, wheat.temp_min, 50.0), Suitability::Suitable);
        assert_eq!(assess(wheat, wheat.temp_max, 50.0), Suitability::Suitable);
        assert_eq!(
            assess(wheat, 15.0, wheat.humidity_min),
            Suitability::Suitable
        );
        assert_eq!(
            assess(wheat, 15.0, wheat.humidity_max),
            Suitability::Suitable
        );
    }

    #[test]
    fn one_range_out_is_partially_suitable() {
        let wheat = crop_conditions("wheat").unwrap();
        // humidity in range, temperature out
        assert_eq!(assess(wheat, 30.0, 50.0), Suitability::PartiallySuitable);
        // temperature in range, humidity out
        assert_eq!(assess(wheat, 15.0, 90.0), Suitability::PartiallySuitable);
    }

    #[test]
    fn both_ranges_out_is_not_suitable() {
        let wheat = crop_conditions("wheat").unwrap();
        assert_eq!(assess(wheat, 35.0, 95.0), Suitability::NotSuitable);
        assert_eq!(assess(wheat, 5.0, 20.0), Suitability::NotSuitable);
    }
}
