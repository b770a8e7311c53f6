#![forbid(unsafe_code)]

//! The reference script: one of every block kind, wrapped in an `if`.

use blockimg::{
    Block, BlockStyle, Boolean, BoxItem, CBlock, Literal, Menu, Reporter, Stack, Theme,
    UnknownCategory,
};

/// `if <A = a> then` with ten commands inside, the last an empty `if`.
pub fn script(theme: &Theme) -> Result<Stack, UnknownCategory> {
    let style = |category: &str| theme.require(category);
    let operators = style("operators")?;
    let if_header = |operators: BlockStyle| -> Vec<BoxItem> {
        vec![
            "if".into(),
            Boolean::new(
                operators,
                vec![Literal::new("A").into(), "=".into(), Literal::new("a").into()],
            )
            .into(),
            "then".into(),
        ]
    };

    let body = Stack::new(vec![
        Block::new(
            style("motion")?,
            vec!["move".into(), Literal::new("10").into(), "steps".into()],
        )
        .into(),
        Block::new(
            style("looks")?,
            vec![
                "say".into(),
                Literal::new("Hello!").into(),
                "for".into(),
                Literal::new("2").into(),
                "seconds".into(),
            ],
        )
        .into(),
        Block::new(style("sound")?, vec!["clear sound effects".into()]).into(),
        Block::new(
            style("events")?,
            vec!["broadcast".into(), Menu::new("message1").into()],
        )
        .into(),
        Block::new(
            style("control")?,
            vec!["wait".into(), Literal::new("1").into(), "seconds".into()],
        )
        .into(),
        Block::new(
            style("sensing")?,
            vec![
                "ask".into(),
                Literal::new("What's your name?").into(),
                "and wait".into(),
            ],
        )
        .into(),
        Block::new(
            style("variables")?,
            vec![
                "set".into(),
                Literal::new("my variable").into(),
                "to".into(),
                Boolean::new(
                    operators,
                    vec![Literal::new("10").into(), "<".into(), Literal::new("20").into()],
                )
                .into(),
            ],
        )
        .into(),
        Block::new(
            style("lists")?,
            vec![
                "add".into(),
                Literal::new("thing").into(),
                "to".into(),
                Menu::new("my list").into(),
            ],
        )
        .into(),
        Block::new(
            style("custom")?,
            vec![
                "custom block".into(),
                Reporter::new(style("sensing")?, vec!["mouse x".into()]).into(),
            ],
        )
        .into(),
        CBlock::new(style("control")?, if_header(operators), Stack::default()).into(),
    ]);

    Ok(CBlock::new(style("control")?, if_header(operators), body).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockimg::{Context, Layout, LayoutConfig, RecordingSurface, StackItem};

    #[test]
    fn script_wraps_ten_commands() {
        let stack = script(&Theme::default()).unwrap();
        assert_eq!(stack.items.len(), 1);
        let StackItem::C(outer) = &stack.items[0] else {
            panic!("expected the outer if");
        };
        assert_eq!(outer.stack.items.len(), 10);
        assert!(matches!(outer.stack.items[9], StackItem::C(_)));
    }

    #[test]
    fn missing_category_is_reported() {
        let mut theme = Theme::empty();
        theme.define("operators", BlockStyle::default());
        let err = script(&theme).unwrap_err();
        assert_eq!(err.category, "motion");
    }

    #[test]
    fn script_fits_its_bounding_box() {
        let config = LayoutConfig::default();
        let stack = script(&Theme::default()).unwrap();
        let mut surface = RecordingSurface::new();
        let mut ctx = Context::new(&mut surface, &config);
        let extent = stack.bounding_box(&ctx).unwrap();
        stack.render(&mut ctx, 10, 10).unwrap();
        let drawn = surface.drawn_bounds().unwrap();
        assert!(extent.to_rect(10, 10).contains_rect(&drawn));
    }
}
