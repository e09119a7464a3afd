//! # Calculation Steps Rendering
//!
//! Turns a finished calculation into an ordered, human-readable walkthrough
//! of the arithmetic. Formatting only: every figure comes from the input
//! snapshot or the already-rounded payload, so the narration always matches
//! what the consumer displays elsewhere.

use crate::calculator::{CalcDetails, CalcResults, CropCalculator};
use crate::equations::round_dp;

impl CropCalculator {
    /// Render the step-by-step explanation for a successful calculation.
    ///
    /// The sequence: sensor identification, input echo, the two diagonal
    /// formulas with substituted numbers, the crop-factor division, the
    /// focal-length multiplications, then the auxiliary metrics. Blank
    /// strings separate the sections.
    pub fn calculation_steps(&self, results: &CalcResults, details: &CalcDetails) -> Vec<String> {
        let original_actual = round_dp(self.original_actual_focal_length(), 1);
        let original_equivalent = round_dp(self.original_equivalent_focal_length(), 1);

        let mut steps = Vec::new();

        steps.push(format!(
            "Sensor: {} ({}×{}mm)",
            details.sensor_info.name, details.sensor_info.width_mm, details.sensor_info.height_mm
        ));
        steps.push(format!(
            "Original photo: {}×{} px",
            self.original_width_px, self.original_height_px
        ));
        steps.push(format!(
            "Cropped photo: {}×{} px",
            self.crop_width_px, self.crop_height_px
        ));
        steps.push(format!(
            "Original focal length: {}mm (35mm equivalent: {}mm)",
            original_actual, original_equivalent
        ));
        steps.push(String::new());

        steps.push("Calculation:".to_string());
        steps.push(format!(
            "1. Original diagonal = √({}² + {}²) = {} px",
            self.original_width_px, self.original_height_px, details.original_diagonal_px
        ));
        steps.push(format!(
            "2. Cropped diagonal = √({}² + {}²) = {} px",
            self.crop_width_px, self.crop_height_px, details.crop_diagonal_px
        ));
        steps.push(format!(
            "3. Crop factor = {} ÷ {} = {}",
            details.original_diagonal_px, details.crop_diagonal_px, results.crop_factor
        ));
        steps.push(format!(
            "4. Cropped actual focal length = {}mm × {} = {}mm",
            original_actual, results.crop_factor, results.crop_actual_focal_length_mm
        ));
        steps.push(format!(
            "5. Cropped 35mm-equivalent focal length = {}mm × {} = {}mm",
            original_equivalent, results.crop_factor, results.crop_equivalent_focal_length_mm
        ));
        steps.push(String::new());

        steps.push("Additional metrics:".to_string());
        steps.push(format!(
            "- Horizontal crop factor: {}",
            results.horizontal_crop_factor
        ));
        steps.push(format!(
            "- Vertical crop factor: {}",
            results.vertical_crop_factor
        ));
        steps.push(format!(
            "- Original aspect ratio: {}:1",
            details.original_aspect_ratio
        ));
        steps.push(format!(
            "- Cropped aspect ratio: {}:1",
            details.crop_aspect_ratio
        ));
        steps.push(format!(
            "- Cropped area: {}% of the original",
            results.crop_ratio_percent
        ));

        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::CalcOutcome;
    use crate::sensors::SensorFormat;

    fn successful_steps(calc: &CropCalculator) -> Vec<String> {
        match calc.calculate() {
            CalcOutcome::Success { results, details } => calc.calculation_steps(&results, &details),
            CalcOutcome::Invalid { errors } => panic!("unexpected errors: {:?}", errors),
        }
    }

    #[test]
    fn test_steps_narrate_payload_figures() {
        let mut calc = CropCalculator::new();
        calc.set_inputs(
            SensorFormat::FullFrame,
            "50",
            "",
            "6000",
            "4000",
            "3000",
            "2000",
        );
        let steps = successful_steps(&calc);

        assert_eq!(steps[0], "Sensor: Full Frame (36×24mm)");
        assert_eq!(steps[1], "Original photo: 6000×4000 px");
        assert_eq!(steps[2], "Cropped photo: 3000×2000 px");
        assert_eq!(steps[3], "Original focal length: 50mm (35mm equivalent: 50mm)");
        assert_eq!(steps[4], "");
        assert_eq!(steps[5], "Calculation:");
        assert_eq!(steps[6], "1. Original diagonal = √(6000² + 4000²) = 7211 px");
        assert_eq!(steps[7], "2. Cropped diagonal = √(3000² + 2000²) = 3606 px");
        assert_eq!(steps[8], "3. Crop factor = 7211 ÷ 3606 = 2");
        assert_eq!(steps[9], "4. Cropped actual focal length = 50mm × 2 = 100mm");
        assert_eq!(
            steps[10],
            "5. Cropped 35mm-equivalent focal length = 50mm × 2 = 100mm"
        );
        assert!(steps.contains(&"- Cropped area: 25% of the original".to_string()));
    }

    #[test]
    fn test_steps_use_rounded_factor() {
        let mut calc = CropCalculator::new();
        calc.set_inputs(
            SensorFormat::Apsc,
            "18",
            "",
            "6000",
            "4000",
            "4000",
            "4000",
        );
        let steps = successful_steps(&calc);

        // factor = diag(6000,4000) / diag(4000,4000), rounded to 1.27
        assert!(steps.iter().any(|s| s.contains("= 1.27")));
        assert!(steps
            .iter()
            .any(|s| s.contains("(35mm equivalent: 27mm)")));
    }

    #[test]
    fn test_steps_echo_derived_actual_for_equivalent_only_input() {
        let mut calc = CropCalculator::new();
        calc.set_inputs(
            SensorFormat::Micro43,
            "",
            "50",
            "4000",
            "3000",
            "4000",
            "3000",
        );
        let steps = successful_steps(&calc);

        // actual derived from the 50mm equivalent via the 2.0 multiplier
        assert_eq!(
            steps[3],
            "Original focal length: 25mm (35mm equivalent: 50mm)"
        );
    }
}
