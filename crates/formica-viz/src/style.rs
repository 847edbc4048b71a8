//! Colours and sizes for each colony member.

use formica_core::types::AgentRole;
use plotters::style::{Color, RGBColor, ShapeStyle, BLUE, GREEN, RED};

pub const ORANGE: RGBColor = RGBColor(255, 165, 0);

/// How one agent is drawn.
#[derive(Debug, Clone, Copy)]
pub struct AgentStyle {
    pub line: ShapeStyle,
    pub marker: ShapeStyle,
    pub marker_size: i32,
}

/// Faint blue scout, bold green learner, orange lost ant.
pub fn agent_style(role: AgentRole) -> AgentStyle {
    match role {
        AgentRole::Scout => AgentStyle {
            line: BLUE.mix(0.3).stroke_width(1),
            marker: BLUE.filled(),
            marker_size: 3,
        },
        AgentRole::Learner => AgentStyle {
            line: GREEN.stroke_width(2),
            marker: GREEN.filled(),
            marker_size: 5,
        },
        AgentRole::UnreliableLearner => AgentStyle {
            line: ORANGE.mix(0.6).stroke_width(1),
            marker: ORANGE.filled(),
            marker_size: 5,
        },
    }
}

pub fn nest_style() -> (ShapeStyle, i32) {
    (GREEN.filled(), 8)
}

pub fn resource_style() -> (ShapeStyle, i32) {
    (RED.filled(), 9)
}
