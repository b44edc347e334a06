//! Cross-checks the flex pass against Taffy on layouts where both agree by
//! definition: definite item sizes, start-aligned cross axis, no wrapping.

use spark_flex::{Align, Axis, FlexTree, ItemStyle, Margins, MeasureMode};
use taffy::prelude::TaffyMaxContent;
use taffy::{
    AlignItems, Dimension, FlexDirection, JustifyContent, LengthPercentageAuto, Rect, Style,
    TaffyTree,
};

const EPSILON: f32 = 0.01;

fn to_taffy_dimension(size: Option<f32>) -> Dimension {
    match size {
        Some(v) => Dimension::Length(v),
        None => Dimension::Auto,
    }
}

fn to_taffy_justify(justify: Align) -> JustifyContent {
    match justify {
        Align::Start | Align::Stretch => JustifyContent::FlexStart,
        Align::End => JustifyContent::FlexEnd,
        Align::Center => JustifyContent::Center,
        Align::SpaceBetween => JustifyContent::SpaceBetween,
        Align::SpaceAround => JustifyContent::SpaceAround,
    }
}

/// Express an item's flex value with CSS grow/shrink/basis.
fn to_taffy_style(style: &ItemStyle, direction: Axis) -> Style {
    let main_size = match direction {
        Axis::Row => style.width,
        Axis::Column => style.height,
    };
    let (flex_grow, flex_shrink, flex_basis) = if style.flex > 0.0 {
        let basis = match main_size {
            Some(_) => Dimension::Auto,
            None => Dimension::Length(0.0),
        };
        (style.flex, 0.0, basis)
    } else if style.flex < 0.0 {
        (0.0, 1.0, Dimension::Auto)
    } else {
        (0.0, 0.0, Dimension::Auto)
    };

    Style {
        size: taffy::Size {
            width: to_taffy_dimension(style.width),
            height: to_taffy_dimension(style.height),
        },
        flex_grow,
        flex_shrink,
        flex_basis,
        margin: Rect {
            left: LengthPercentageAuto::Length(style.margin.left),
            right: LengthPercentageAuto::Length(style.margin.right),
            top: LengthPercentageAuto::Length(style.margin.top),
            bottom: LengthPercentageAuto::Length(style.margin.bottom),
        },
        ..Default::default()
    }
}

fn assert_matches_taffy(
    direction: Axis,
    justify: Align,
    (width, height): (f32, f32),
    styles: &[ItemStyle],
) {
    let _ = env_logger::builder().is_test(true).try_init();

    // spark-flex
    let mut tree = FlexTree::new();
    let root = tree.new_container(ItemStyle::default(), direction, justify);
    let kids: Vec<_> = styles
        .iter()
        .map(|&style| {
            let kid = tree.new_leaf(style);
            tree.add_child(root, kid).unwrap();
            kid
        })
        .collect();
    tree.compute_layout(root, width, MeasureMode::Exactly, height, MeasureMode::Exactly)
        .unwrap();

    // Taffy
    let mut taffy: TaffyTree<()> = TaffyTree::new();
    taffy.disable_rounding();
    let taffy_kids: Vec<_> = styles
        .iter()
        .map(|style| taffy.new_leaf(to_taffy_style(style, direction)).unwrap())
        .collect();
    let taffy_root = taffy
        .new_with_children(
            Style {
                flex_direction: match direction {
                    Axis::Row => FlexDirection::Row,
                    Axis::Column => FlexDirection::Column,
                },
                justify_content: Some(to_taffy_justify(justify)),
                align_items: Some(AlignItems::FlexStart),
                size: taffy::Size {
                    width: Dimension::Length(width),
                    height: Dimension::Length(height),
                },
                ..Default::default()
            },
            &taffy_kids,
        )
        .unwrap();
    taffy
        .compute_layout(taffy_root, taffy::Size::MAX_CONTENT)
        .unwrap();

    for (i, (&kid, &taffy_kid)) in kids.iter().zip(&taffy_kids).enumerate() {
        let ours = tree.get_layout(kid).unwrap();
        let theirs = taffy.layout(taffy_kid).unwrap();
        let pairs = [
            ("x", ours.x, theirs.location.x),
            ("y", ours.y, theirs.location.y),
            ("width", ours.width, theirs.size.width),
            ("height", ours.height, theirs.size.height),
        ];
        for (field, a, b) in pairs {
            assert!(
                (a - b).abs() < EPSILON,
                "{direction:?}/{justify:?} child {i} {field}: spark-flex {a}, taffy {b}"
            );
        }
    }
}

#[test]
fn test_justify_matches_taffy() {
    let styles = [
        ItemStyle::new().with_size(30.0, 10.0),
        ItemStyle::new().with_size(20.0, 10.0),
    ];
    for justify in [
        Align::Start,
        Align::End,
        Align::Center,
        Align::SpaceBetween,
        Align::SpaceAround,
    ] {
        assert_matches_taffy(Axis::Row, justify, (100.0, 50.0), &styles);
    }
}

#[test]
fn test_column_matches_taffy() {
    let styles = [
        ItemStyle::new().with_size(10.0, 30.0),
        ItemStyle::new().with_size(10.0, 20.0),
        ItemStyle::new().with_size(15.0, 5.0),
    ];
    assert_matches_taffy(Axis::Column, Align::SpaceAround, (50.0, 100.0), &styles);
    assert_matches_taffy(Axis::Column, Align::End, (50.0, 100.0), &styles);
}

#[test]
fn test_grow_matches_taffy() {
    assert_matches_taffy(
        Axis::Row,
        Align::Start,
        (100.0, 50.0),
        &[
            ItemStyle::new().with_height(10.0).with_flex(1.0),
            ItemStyle::new().with_height(10.0).with_flex(3.0),
        ],
    );
    assert_matches_taffy(
        Axis::Row,
        Align::Start,
        (100.0, 50.0),
        &[
            ItemStyle::new().with_size(20.0, 10.0),
            ItemStyle::new().with_height(10.0).with_flex(1.0),
        ],
    );
    assert_matches_taffy(
        Axis::Row,
        Align::Start,
        (100.0, 50.0),
        &[
            ItemStyle::new().with_size(10.0, 10.0).with_flex(1.0),
            ItemStyle::new().with_size(20.0, 10.0).with_flex(1.0),
        ],
    );
}

#[test]
fn test_shrink_matches_taffy() {
    assert_matches_taffy(
        Axis::Row,
        Align::Start,
        (100.0, 50.0),
        &[
            ItemStyle::new().with_size(60.0, 10.0).with_flex(-1.0),
            ItemStyle::new().with_size(60.0, 10.0).with_flex(-1.0),
        ],
    );
    assert_matches_taffy(
        Axis::Row,
        Align::Start,
        (100.0, 50.0),
        &[
            ItemStyle::new().with_size(60.0, 10.0).with_flex(-5.0),
            ItemStyle::new().with_size(20.0, 10.0).with_flex(-1.0),
            ItemStyle::new().with_size(40.0, 10.0),
        ],
    );
}

#[test]
fn test_margins_match_taffy() {
    let margin = Margins::new(1.0, 2.0, 3.0, 4.0);
    let styles = [
        ItemStyle::new().with_size(10.0, 10.0).with_margin(margin),
        ItemStyle::new().with_size(10.0, 10.0).with_margin(margin),
    ];
    assert_matches_taffy(Axis::Row, Align::Start, (100.0, 50.0), &styles);
    assert_matches_taffy(Axis::Row, Align::SpaceBetween, (100.0, 50.0), &styles);
    assert_matches_taffy(Axis::Column, Align::Center, (50.0, 100.0), &styles);
    assert_matches_taffy(Axis::Column, Align::SpaceAround, (50.0, 100.0), &styles);
}
