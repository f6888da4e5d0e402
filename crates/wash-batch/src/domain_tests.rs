//! Domain-critical regression tests for wash-batch.
//!
//! These tests exercise the whole planning pipeline on small, hand-checked
//! color sets. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::{ImageInput, PlanConfig, PlanError, WashPlan, WashPlanner};
    use crate::color::Rgb;
    use crate::descriptor::ColorDescriptor;

    fn inputs(colors: &[(&str, (u8, u8, u8))]) -> Vec<ImageInput> {
        colors
            .iter()
            .map(|&(id, rgb)| ImageInput::with_color(id, Rgb::from(rgb)))
            .collect()
    }

    fn plan(colors: &[(&str, (u8, u8, u8))]) -> WashPlan {
        WashPlanner::default()
            .plan(inputs(colors))
            .expect("plan should succeed")
    }

    fn batch_ids(plan: &WashPlan) -> Vec<Vec<&str>> {
        plan.batches()
            .iter()
            .map(|b| b.iter().map(ColorDescriptor::source_id).collect())
            .collect()
    }

    fn ordered_ids(plan: &WashPlan) -> Vec<&str> {
        plan.ordered().iter().map(ColorDescriptor::source_id).collect()
    }

    /// Mixed set used by the property tests: whites, pastels, reds, darks.
    const MIXED: [(&str, (u8, u8, u8)); 10] = [
        ("navy", (20, 30, 120)),
        ("white", (255, 255, 255)),
        ("red", (230, 20, 20)),
        ("sky", (120, 160, 220)),
        ("cream", (250, 250, 245)),
        ("black", (5, 5, 5)),
        ("sky2", (118, 158, 218)),
        ("olive", (128, 128, 0)),
        ("grey", (128, 128, 128)),
        ("orange", (255, 140, 0)),
    ];

    // ========================================================================
    // Scenarios
    // ========================================================================

    /// If this breaks, it means: the red-family rule stopped isolating reds.
    /// Two nearly identical reds must still be washed between.
    #[test]
    fn test_scenario_two_reds() {
        let plan = plan(&[("red", (255, 0, 0)), ("red2", (250, 5, 5))]);

        assert!(plan.ordered().iter().all(ColorDescriptor::requires_wash));
        assert_eq!(plan.batches().len(), 2);
        assert_eq!(plan.washes_saved(), 0);
    }

    /// If this breaks, it means: white is being classified as red because
    /// achromatic colors report hue 0, or the ΔE threshold is too strict
    /// for near-whites.
    #[test]
    fn test_scenario_white_and_cream() {
        let plan = plan(&[("white", (255, 255, 255)), ("cream", (250, 250, 245))]);

        assert!(plan.ordered().iter().all(|d| !d.requires_wash()));
        assert_eq!(batch_ids(&plan), vec![vec!["white", "cream"]]);
        assert_eq!(plan.washes_saved(), 1);
    }

    /// If this breaks, it means: the near-black rule is applied on the wrong
    /// scale. (10,10,10) has YIQ brightness exactly 10 on 0-255, which is
    /// still near-black.
    #[test]
    fn test_scenario_two_blacks() {
        let plan = plan(&[("black", (0, 0, 0)), ("charcoal", (10, 10, 10))]);

        assert!(plan.ordered().iter().all(ColorDescriptor::requires_wash));
        assert_eq!(ordered_ids(&plan), vec!["charcoal", "black"]);
        assert_eq!(plan.batches().len(), 2);
        assert_eq!(plan.washes_saved(), 0);
    }

    /// If this breaks, it means: the near-black bound is compared against
    /// the 0-100 lightness instead of the 0-255 brightness, which would wash
    /// saturated dark blues such as (0,0,200).
    #[test]
    fn test_dark_blues_are_not_near_black() {
        let plan = plan(&[
            ("white", (255, 255, 255)),
            ("royal", (0, 0, 200)),
            ("ink", (20, 20, 60)),
            ("charcoal", (11, 11, 11)),
        ]);

        assert!(plan.ordered().iter().all(|d| !d.requires_wash()));
        assert!(plan
            .ordered()
            .iter()
            .all(|d| d.wash_reason().is_none()));
    }

    /// If this breaks, it means: an empty request produced an empty plan
    /// instead of an error.
    #[test]
    fn test_scenario_empty_input() {
        let err = WashPlanner::default().plan(Vec::new()).unwrap_err();
        assert_eq!(
            err,
            PlanError::NoUsableInput {
                skipped: Vec::new()
            }
        );
    }

    /// If this breaks, it means: the partitioner compares against something
    /// other than the immediately preceding color, or lets a wash color join
    /// a batch. "first" and "third" are perceptually close, but a red that
    /// ranks between them forces three separate batches.
    #[test]
    fn test_scenario_wash_color_between_close_colors() {
        let first = Rgb::new(120, 160, 220);
        let third = Rgb::new(118, 158, 218);
        let red = Rgb::new(250, 112, 112);

        // Preconditions of the scenario
        assert!(crate::Lab::from(first).delta_e(crate::Lab::from(third)) <= 10.0);
        assert!(first.lightness() > red.lightness());
        assert!(red.lightness() > third.lightness());

        let plan = plan(&[
            ("third", (118, 158, 218)),
            ("red", (250, 112, 112)),
            ("first", (120, 160, 220)),
        ]);

        assert_eq!(ordered_ids(&plan), vec!["first", "red", "third"]);
        assert_eq!(
            batch_ids(&plan),
            vec![vec!["first"], vec!["red"], vec!["third"]]
        );
        assert_eq!(plan.washes_saved(), 0);
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// If this breaks, it means: planning depends on hidden state (globals,
    /// unstable sorting, hash ordering).
    #[test]
    fn test_determinism() {
        let a = plan(&MIXED);
        let b = plan(&MIXED);
        assert_eq!(a, b);
    }

    /// If this breaks, it means: batches dropped, duplicated or reordered
    /// colors.
    #[test]
    fn test_batches_cover_ordered_sequence() {
        let plan = plan(&MIXED);
        let flat: Vec<&ColorDescriptor> =
            plan.batches().iter().flat_map(|b| b.iter()).collect();
        let ordered: Vec<&ColorDescriptor> = plan.ordered().iter().collect();

        assert_eq!(flat, ordered);
        assert_eq!(plan.ordered().len(), MIXED.len());
        assert!(plan.batches().iter().all(|b| !b.is_empty()));
    }

    /// If this breaks, it means: washes_saved is no longer the descriptor
    /// count minus the batch count.
    #[test]
    fn test_savings_identity() {
        let plan = plan(&MIXED);
        assert_eq!(
            plan.washes_saved(),
            plan.ordered().len() - plan.batches().len()
        );
    }

    /// If this breaks, it means: the sequencer sorts ascending or on a
    /// different lightness measure.
    #[test]
    fn test_monotonic_ordering() {
        let plan = plan(&MIXED);
        for pair in plan.ordered().windows(2) {
            assert!(
                pair[0].lightness() >= pair[1].lightness(),
                "{} ({:.2}) ranked before lighter {} ({:.2})",
                pair[0].source_id(),
                pair[0].lightness(),
                pair[1].source_id(),
                pair[1].lightness()
            );
        }
    }

    /// If this breaks, it means: a color that mandates a wash was allowed to
    /// follow another color without one.
    #[test]
    fn test_wash_colors_open_batches() {
        let plan = plan(&MIXED);
        for batch in plan.batches() {
            for color in &batch.colors()[1..] {
                assert!(
                    !color.requires_wash(),
                    "{} requires a wash but is not first in its batch",
                    color.source_id()
                );
            }
        }
    }

    /// If this breaks, it means: two adjacent colors inside a batch are
    /// farther apart than the configured threshold.
    #[test]
    fn test_threshold_respected_inside_batches() {
        for threshold in [2.0, 5.0, 10.0, 25.0] {
            let plan = WashPlanner::new(PlanConfig::default().delta_e_threshold(threshold))
                .plan(inputs(&MIXED))
                .unwrap();
            for batch in plan.batches() {
                for pair in batch.colors().windows(2) {
                    let d = pair[1].delta_e(&pair[0]);
                    assert!(
                        d <= threshold,
                        "{} -> {} has ΔE {d:.2} > {threshold}",
                        pair[0].source_id(),
                        pair[1].source_id()
                    );
                }
            }
        }
    }

    /// If this breaks, it means: raising the threshold produced more
    /// batches. A looser threshold can only merge runs.
    #[test]
    fn test_looser_threshold_never_adds_batches() {
        let mut prev = usize::MAX;
        for threshold in [0.0, 1.0, 5.0, 10.0, 50.0, f64::INFINITY] {
            let count = WashPlanner::new(PlanConfig::default().delta_e_threshold(threshold))
                .plan(inputs(&MIXED))
                .unwrap()
                .batches()
                .len();
            assert!(count <= prev, "threshold {threshold} gave {count} > {prev}");
            prev = count;
        }
    }

    /// If this breaks, it means: an infinite threshold no longer reduces to
    /// the wash-only policy (one batch per wash color plus a leading batch).
    #[test]
    fn test_infinite_threshold_is_wash_only_policy() {
        let plan = WashPlanner::new(PlanConfig::default().delta_e_threshold(f64::INFINITY))
            .plan(inputs(&MIXED))
            .unwrap();

        let wash_count = plan.ordered().iter().filter(|d| d.requires_wash()).count();
        let leading = usize::from(!plan.ordered()[0].requires_wash());
        assert_eq!(plan.batches().len(), wash_count + leading);
    }

    /// If this breaks, it means: the orange just past 30 degrees or the
    /// magenta-red near 360 degrees is being treated as part of the red
    /// family.
    #[test]
    fn test_red_family_boundaries() {
        let plan = plan(&[
            ("orange", (255, 128, 0)),
            ("rose", (255, 0, 40)),
            ("vermilion", (255, 60, 0)),
        ]);
        let flag = |id: &str| {
            plan.ordered()
                .iter()
                .find(|d| d.source_id() == id)
                .map(ColorDescriptor::requires_wash)
                .unwrap()
        };
        assert!(!flag("orange"));
        assert!(!flag("rose"));
        assert!(flag("vermilion"));
    }
}
