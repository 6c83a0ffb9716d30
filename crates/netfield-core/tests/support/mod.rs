// Shared test helpers: a painter that records every call.

#![allow(dead_code)]

use glam::Vec2;
use netfield_core::{DotStyle, Painter, Rgba};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear { width: f32, height: f32 },
    Dot { center: Vec2, radius: f32, style: DotStyle },
    Link { from: Vec2, to: Vec2, color: Rgba, width: f32 },
}

#[derive(Default)]
pub struct RecordingPainter {
    pub ops: Vec<Op>,
}

impl RecordingPainter {
    pub fn clears(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Clear { .. })).count()
    }

    pub fn dots(&self) -> Vec<(Vec2, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Dot { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    pub fn links(&self) -> Vec<(Vec2, Vec2, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Link { from, to, color, .. } => Some((*from, *to, color.a)),
                _ => None,
            })
            .collect()
    }

    pub fn take(&mut self) -> Vec<Op> {
        std::mem::take(&mut self.ops)
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(Op::Clear { width, height });
    }

    fn dot(&mut self, center: Vec2, radius: f32, style: &DotStyle) {
        self.ops.push(Op::Dot {
            center,
            radius,
            style: *style,
        });
    }

    fn link(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ops.push(Op::Link {
            from,
            to,
            color,
            width,
        });
    }
}

pub fn ms(n: u64) -> std::time::Duration {
    std::time::Duration::from_millis(n)
}
