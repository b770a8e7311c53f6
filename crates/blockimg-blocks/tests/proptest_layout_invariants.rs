//! Property-based invariant tests for block layout.
//!
//! 1. Everything a stack draws lies inside its bounding box.
//! 2. A strict canvas sized to the bounding box (plus margin) never
//!    reports an out-of-bounds pixel.
//! 3. Measuring is repeatable and does not depend on the draw position.
//! 4. Rendering the same tree twice records the same operations.
//! 5. An interlocking stack is never taller than it draws.
//! 6. Any layout constants that pass `LayoutConfig::validate` keep 1 and 2.

use blockimg_blocks::{
    Block, Boolean, BoxItem, CBlock, Context, Layout, Literal, Menu, Reporter, Stack, StackItem,
};
use blockimg_render::{Canvas, ClipMode, RecordingSurface, Rgb};
use blockimg_style::{BlockStyle, LayoutConfig, Theme};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn style_strategy() -> impl Strategy<Value = BlockStyle> {
    let theme = Theme::default();
    let styles: Vec<BlockStyle> = theme
        .categories()
        .filter_map(|category| theme.get(category).copied())
        .collect();
    prop::sample::select(styles)
}

fn leaf_strategy() -> impl Strategy<Value = BoxItem> {
    prop_oneof![
        "[a-z ?]{0,10}".prop_map(BoxItem::from),
        "[0-9]{0,4}".prop_map(|value| Literal::new(value).into()),
        "[a-z]{1,8}".prop_map(|value| Menu::new(value).into()),
    ]
}

/// Row items, with reporters and booleans nested up to three deep.
fn item_strategy() -> impl Strategy<Value = BoxItem> {
    leaf_strategy().prop_recursive(3, 16, 4, |inner| {
        (
            style_strategy(),
            prop::collection::vec(inner, 0..4),
            any::<bool>(),
        )
            .prop_map(|(style, items, boolean)| {
                if boolean {
                    Boolean::new(style, items).into()
                } else {
                    Reporter::new(style, items).into()
                }
            })
    })
}

fn block_strategy() -> impl Strategy<Value = StackItem> {
    (style_strategy(), prop::collection::vec(item_strategy(), 0..4))
        .prop_map(|(style, items)| Block::new(style, items).into())
}

/// Mark the final item (if any) as ending the stack.
fn finish(mut items: Vec<StackItem>, last: bool) -> Stack {
    match items.last_mut() {
        Some(StackItem::Block(block)) => block.is_last = last,
        Some(StackItem::C(c)) => c.is_last = last,
        None => {}
    }
    Stack::new(items)
}

fn stack_strategy() -> impl Strategy<Value = Stack> {
    let items = prop::collection::vec(block_strategy(), 0..4).prop_recursive(
        3,
        24,
        4,
        |inner| {
            let c = (
                style_strategy(),
                prop::collection::vec(item_strategy(), 0..3),
                inner,
                any::<bool>(),
            )
                .prop_map(|(style, items, nested, last)| {
                    StackItem::from(CBlock::new(style, items, finish(nested, last)))
                });
            prop::collection::vec(prop_oneof![block_strategy(), c], 0..4)
        },
    );
    (items, any::<bool>()).prop_map(|(items, last)| finish(items, last))
}

fn metrics_strategy() -> impl Strategy<Value = (i32, i32)> {
    (1i32..=12, 1i32..=20)
}

/// Layout constants around the defaults, including ones `validate` rejects.
///
/// Paddings start at 2 and inline roundness stays small so that empty
/// literals and reporters are never narrower than their own corners.
fn config_strategy() -> impl Strategy<Value = LayoutConfig> {
    (
        (0i32..=30, 2i32..=8, 2i32..=6, 0i32..=8),
        (0i32..=2, 0i32..=2, 0i32..=1, 0i32..=2),
        (0i32..=4, 1i32..=24, 0i32..=40),
        (0i32..=8, 0i32..=10, 0i32..=8),
    )
        .prop_map(
            |(
                (min_block_height, padding_x, padding_y, gap),
                (block_roundness, reporter_roundness, boolean_roundness, literal_roundness),
                (c_roundness, c_width, c_min_height),
                (tab_padding, tab_width, tab_height),
            )| LayoutConfig {
                min_block_height,
                padding_x,
                padding_y,
                gap,
                block_roundness,
                reporter_roundness,
                boolean_roundness,
                literal_roundness,
                c_roundness,
                c_width,
                c_min_height,
                tab_padding,
                tab_width,
                tab_height,
                ..LayoutConfig::default()
            },
        )
}

fn empty_c(last: bool) -> Stack {
    let style = Theme::default().require("control").unwrap();
    let c = CBlock::new(style, vec!["if".into()], Stack::default());
    Stack::from(if last { c.last() } else { c })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Drawing stays inside the bounding box
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn drawn_ops_stay_inside_bounding_box(
        stack in stack_strategy(),
        (char_width, line_height) in metrics_strategy(),
        x in -200i32..200,
        y in -200i32..200,
    ) {
        let config = LayoutConfig::default();
        let mut surface = RecordingSurface::with_metrics(char_width, line_height);
        let mut ctx = Context::new(&mut surface, &config);
        let extent = stack.bounding_box(&ctx).unwrap();
        stack.render(&mut ctx, x, y).unwrap();

        if let Some(drawn) = surface.drawn_bounds() {
            let claimed = extent.to_rect(x, y);
            prop_assert!(
                claimed.contains_rect(&drawn),
                "drawn {:?} escapes claimed {:?}",
                drawn,
                claimed
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Strict canvas never overflows
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn strict_canvas_fits_the_diagram(stack in stack_strategy(), margin in 0i32..8) {
        let config = LayoutConfig::default();
        let extent = {
            let mut probe = Canvas::new(0, 0, Rgb::WHITE);
            let ctx = Context::new(&mut probe, &config);
            stack.bounding_box(&ctx).unwrap()
        };
        let mut canvas = Canvas::for_extent(extent.outset(margin), Rgb::WHITE)
            .with_clip_mode(ClipMode::Strict);
        let mut ctx = Context::new(&mut canvas, &config);
        let result = stack.render(&mut ctx, margin, margin);
        prop_assert!(result.is_ok(), "{:?}", result);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Measurement is repeatable
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn measuring_is_idempotent(stack in stack_strategy()) {
        let config = LayoutConfig::default();
        let mut surface = RecordingSurface::new();
        let mut ctx = Context::new(&mut surface, &config);
        let before = stack.bounding_box(&ctx).unwrap();
        stack.render(&mut ctx, 17, 23).unwrap();
        let after = stack.bounding_box(&ctx).unwrap();
        prop_assert_eq!(before, after);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Rendering is deterministic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rendering_twice_records_the_same_ops(stack in stack_strategy()) {
        let config = LayoutConfig::default();
        let mut first = RecordingSurface::new();
        stack.render(&mut Context::new(&mut first, &config), 0, 0).unwrap();
        let mut second = RecordingSurface::new();
        stack.render(&mut Context::new(&mut second, &config), 0, 0).unwrap();
        prop_assert_eq!(first.ops(), second.ops());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Interlock never exceeds the drawn extent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn interlock_is_at_most_drawn_extent(stack in stack_strategy()) {
        let config = LayoutConfig::default();
        let mut surface = RecordingSurface::new();
        let ctx = Context::new(&mut surface, &config);
        let drawn = stack.bounding_box(&ctx).unwrap();
        let interlock = stack.interlock_extent(&ctx).unwrap();
        prop_assert_eq!(drawn.width, interlock.width);
        prop_assert!(interlock.height <= drawn.height);
        if stack.is_last() {
            prop_assert_eq!(drawn.height - interlock.height, config.tab_height + 1);
        } else {
            prop_assert_eq!(drawn.height, interlock.height);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Validated configs keep drawing inside the box
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn valid_configs_stay_inside_bounding_box(
        config in config_strategy(),
        stack in stack_strategy(),
        (char_width, line_height) in metrics_strategy(),
    ) {
        prop_assume!(config.validate().is_ok());

        let mut surface = RecordingSurface::with_metrics(char_width, line_height);
        let mut ctx = Context::new(&mut surface, &config);
        let extent = stack.bounding_box(&ctx).unwrap();
        stack.render(&mut ctx, 5, -7).unwrap();
        if let Some(drawn) = surface.drawn_bounds() {
            let claimed = extent.to_rect(5, -7);
            prop_assert!(
                claimed.contains_rect(&drawn),
                "drawn {:?} escapes claimed {:?} with {:?}",
                drawn,
                claimed,
                config
            );
        }
    }

    #[test]
    fn valid_configs_fit_a_strict_canvas(config in config_strategy(), stack in stack_strategy()) {
        prop_assume!(config.validate().is_ok());

        let extent = {
            let mut probe = Canvas::new(0, 0, Rgb::WHITE);
            let ctx = Context::new(&mut probe, &config);
            stack.bounding_box(&ctx).unwrap()
        };
        let mut canvas = Canvas::for_extent(extent, Rgb::WHITE).with_clip_mode(ClipMode::Strict);
        let result = stack.render(&mut Context::new(&mut canvas, &config), 0, 0);
        prop_assert!(result.is_ok(), "{:?} with {:?}", result, config);
    }
}

#[test]
fn empty_c_at_the_tab_limits_stays_inside() {
    // The largest inner tab an 8px bar takes, and the shortest empty mouth
    // that still fits the header notch.
    let config = LayoutConfig {
        tab_height: 7,
        c_width: 8,
        c_min_height: 7 + 1 + 2 * 2,
        ..LayoutConfig::default()
    };
    assert!(config.validate().is_ok());
    for last in [true, false] {
        let stack = empty_c(last);
        let mut surface = RecordingSurface::new();
        let mut ctx = Context::new(&mut surface, &config);
        let claimed = stack.bounding_box(&ctx).unwrap().to_rect(0, 0);
        stack.render(&mut ctx, 0, 0).unwrap();
        let drawn = surface.drawn_bounds().unwrap();
        assert!(claimed.contains_rect(&drawn), "last={last}: {drawn:?} vs {claimed:?}");
        assert!(drawn.y0 >= 0);
    }
}
