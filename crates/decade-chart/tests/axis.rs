// File: crates/decade-chart/tests/axis.rs
// Purpose: Axis bracket, tick groups and title placement.

use decade_chart::axis::{DEFAULT_GUTTER, TICK_SIZE};
use decade_chart::scene::{Group, Node, PathCmd, TextAnchor, TextNode};
use decade_chart::{Axis, TickDensity};

fn group(node: Node) -> Group {
    match node {
        Node::Group(g) => g,
        _ => panic!("axis draws a group"),
    }
}

fn tick_groups(g: &Group) -> Vec<&Group> {
    g.children
        .iter()
        .filter_map(|n| match n {
            Node::Group(t) if t.class == Some("tick") => Some(t),
            _ => None,
        })
        .collect()
}

fn label(tick: &Group) -> &TextNode {
    tick.children
        .iter()
        .find_map(|n| match n {
            Node::Text(t) => Some(t),
            _ => None,
        })
        .expect("tick label")
}

#[test]
fn vertical_bracket_and_ticks() {
    let axis = Axis::vertical((0.0, 10.0), (500.0, 0.0)).with_density(TickDensity::Count(10));
    let g = group(axis.draw());
    let Some(Node::Path(bracket)) = g.children.first() else { panic!("bracket first") };
    assert_eq!(
        bracket.cmds,
        [
            PathCmd::MoveTo(DEFAULT_GUTTER, 500.0),
            PathCmd::LineTo(DEFAULT_GUTTER + TICK_SIZE, 500.0),
            PathCmd::LineTo(DEFAULT_GUTTER + TICK_SIZE, 0.0),
            PathCmd::LineTo(DEFAULT_GUTTER, 0.0),
        ]
    );

    let ticks = tick_groups(&g);
    assert_eq!(ticks.len(), 11);
    assert_eq!((ticks[0].transform.tx, ticks[0].transform.ty), (50.0, 500.0));
    assert_eq!((ticks[10].transform.tx, ticks[10].transform.ty), (50.0, 0.0));
    let first = label(ticks[0]);
    assert_eq!(first.text, "0");
    assert_eq!(first.anchor, Some(TextAnchor::End));
    assert_eq!(first.x, -5.0);
    assert_eq!(label(ticks[5]).text, "5");
}

#[test]
fn default_density_follows_range_length() {
    let axis = Axis::horizontal((0.0, 1.0), (0.0, 150.0));
    // 150px / 30 = 5 ticks requested
    let values: Vec<f64> = axis.ticks().iter().map(|t| t.value).collect();
    assert_eq!(values, [0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
}

#[test]
fn horizontal_ticks_sit_along_the_baseline() {
    let g = group(Axis::horizontal((0.0, 4.0), (0.0, 120.0)).draw());
    let Some(Node::Path(bracket)) = g.children.first() else { panic!("bracket first") };
    assert_eq!(bracket.cmds[0], PathCmd::MoveTo(0.0, TICK_SIZE));
    assert_eq!(bracket.cmds[2], PathCmd::LineTo(120.0, 0.0));

    let ticks = tick_groups(&g);
    assert_eq!(ticks.len(), 5);
    for (i, t) in ticks.iter().enumerate() {
        assert_eq!((t.transform.tx, t.transform.ty), (i as f64 * 30.0, 0.0));
        assert_eq!(label(t).anchor, Some(TextAnchor::Middle));
    }
}

#[test]
fn vertical_title_is_rotated_into_the_gutter() {
    let g = group(Axis::vertical((0.0, 10.0), (0.0, 300.0)).with_title("Rating").draw());
    let Some(Node::Text(title)) = g.children.last() else { panic!("title last") };
    assert_eq!(title.text, "Rating");
    assert_eq!(title.anchor, Some(TextAnchor::End));
    assert_eq!((title.transform.tx, title.transform.ty, title.transform.rotate), (20.0, 115.0, -90.0));
}

#[test]
fn horizontal_title_is_not_drawn() {
    let g = group(Axis::horizontal((0.0, 10.0), (0.0, 300.0)).with_title("Year").draw());
    assert!(g.children.iter().all(|n| !matches!(n, Node::Text(_))));
}
