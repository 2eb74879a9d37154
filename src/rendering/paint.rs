/// Paint commands for a laid out receipt

use crate::rendering::layout::{Element, PageLayout, EDGE_DEPTH};

pub type Rgba = (u8, u8, u8, u8);

pub const PAPER: Rgba = (253, 251, 247, 255);
pub const INK: Rgba = (26, 26, 26, 255);
pub const MUTED: Rgba = (140, 140, 140, 255);

const TOOTH: u32 = 8;
const DASH_ON: u32 = 4;
const DASH_OFF: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        rgba: Rgba,
    },
    /// One-unit outline
    StrokeRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        rgba: Rgba,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        scale: u32,
        rgba: Rgba,
    },
}

fn solid(x: i32, y: i32, width: u32, height: u32, rgba: Rgba) -> PaintCommand {
    PaintCommand::SolidRect {
        x,
        y,
        width,
        height,
        rgba,
    }
}

/// Paper body plus saw-tooth top and bottom edges. Gaps between teeth stay
/// transparent.
fn paper(width: u32, height: u32, out: &mut Vec<PaintCommand>) {
    if height <= EDGE_DEPTH * 2 {
        return;
    }
    out.push(solid(0, EDGE_DEPTH as i32, width, height - EDGE_DEPTH * 2, PAPER));
    for tx in (0..width).step_by(TOOTH as usize) {
        for r in 0..EDGE_DEPTH {
            let x = tx + r;
            if x >= width {
                break;
            }
            let w = (TOOTH - 2 * r).min(width - x);
            out.push(solid(x as i32, (EDGE_DEPTH - 1 - r) as i32, w, 1, PAPER));
            out.push(solid(x as i32, (height - EDGE_DEPTH + r) as i32, w, 1, PAPER));
        }
    }
}

/// Turn a layout into an ordered list of paint commands.
pub fn paint_layout(layout: &PageLayout) -> Vec<PaintCommand> {
    let mut out = Vec::new();
    if layout.width() == 0 || layout.height() == 0 {
        return out;
    }
    paper(layout.width(), layout.height(), &mut out);

    for node in &layout.nodes {
        let r = &node.rect;
        match &node.element {
            Element::Text { text, scale } => out.push(PaintCommand::Text {
                x: r.x,
                y: r.y,
                text: text.clone(),
                scale: *scale,
                rgba: INK,
            }),
            Element::Rule { dashed: false } => out.push(solid(r.x, r.y, r.width, r.height, INK)),
            Element::Rule { dashed: true } => {
                let mut off = 0;
                while off < r.width {
                    let w = DASH_ON.min(r.width - off);
                    out.push(solid(r.x + off as i32, r.y, w, r.height, MUTED));
                    off += DASH_ON + DASH_OFF;
                }
            }
            Element::Track { fill } => {
                out.push(PaintCommand::StrokeRect {
                    x: r.x,
                    y: r.y,
                    width: r.width,
                    height: r.height,
                    rgba: MUTED,
                });
                let inner = r.width.saturating_sub(2);
                let filled = (inner as f64 * fill.clamp(0.0, 1.0)).round() as u32;
                if filled > 0 {
                    out.push(solid(r.x + 1, r.y + 1, filled, r.height.saturating_sub(2), INK));
                }
            }
            Element::Frame => out.push(PaintCommand::StrokeRect {
                x: r.x,
                y: r.y,
                width: r.width,
                height: r.height,
                rgba: INK,
            }),
            Element::Bar => out.push(solid(r.x, r.y, r.width, r.height, INK)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::layout::{BoxModel, LayoutBox, LayoutNode, Rect};

    fn page(nodes: Vec<LayoutNode>) -> PageLayout {
        PageLayout {
            paper: LayoutBox {
                rect: Rect {
                    x: 0,
                    y: 0,
                    width: 40,
                    height: 40,
                },
                box_model: BoxModel {
                    margin: 0,
                    border: 0,
                    padding: 4,
                },
            },
            nodes,
        }
    }

    #[test]
    fn empty_layout_paints_nothing() {
        let mut p = page(vec![]);
        p.paper.rect.height = 0;
        assert!(paint_layout(&p).is_empty());
    }

    #[test]
    fn paper_comes_first() {
        let cmds = paint_layout(&page(vec![]));
        match &cmds[0] {
            PaintCommand::SolidRect { y, height, rgba, .. } => {
                assert_eq!(*y, EDGE_DEPTH as i32);
                assert_eq!(*height, 40 - EDGE_DEPTH * 2);
                assert_eq!(*rgba, PAPER);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn track_fill_scales_with_value() {
        let node = |fill| LayoutNode {
            rect: Rect {
                x: 4,
                y: 10,
                width: 22,
                height: 6,
            },
            element: Element::Track { fill },
        };
        let cmds = paint_layout(&page(vec![node(0.5)]));
        let fill = cmds.iter().rev().find_map(|c| match c {
            PaintCommand::SolidRect { width, rgba, .. } if *rgba == INK => Some(*width),
            _ => None,
        });
        assert_eq!(fill, Some(10));

        let cmds = paint_layout(&page(vec![node(0.0)]));
        assert!(!cmds
            .iter()
            .any(|c| matches!(c, PaintCommand::SolidRect { rgba, .. } if *rgba == INK)));
    }

    #[test]
    fn dashed_rules_break_up() {
        let rule = LayoutNode {
            rect: Rect {
                x: 0,
                y: 5,
                width: 14,
                height: 1,
            },
            element: Element::Rule { dashed: true },
        };
        let dashes = paint_layout(&page(vec![rule]))
            .into_iter()
            .filter(|c| matches!(c, PaintCommand::SolidRect { rgba, .. } if *rgba == MUTED))
            .count();
        assert_eq!(dashes, 2);
    }
}
