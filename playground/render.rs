//! Page template for the playground.
//!
//! The page is a single HTML file embedded at compile time with `{{TOKEN}}`
//! placeholders filled from the running configuration.

use crate::state::PlaygroundState;

const TEMPLATE: &str = include_str!("assets/playground.html");

pub fn render_page(state: &PlaygroundState) -> String {
    TEMPLATE
        .replace("{{CANVAS_PX}}", &state.config.canvas_px.to_string())
        .replace("{{CLASSES}}", &state.samples.classes().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrite_playground::PlaygroundConfig;

    #[test]
    fn fills_every_placeholder() {
        let config = PlaygroundConfig { seed: Some(1), canvas_px: 640, ..PlaygroundConfig::default() };
        let state = PlaygroundState::new(config).unwrap();
        let html = render_page(&state);
        assert!(!html.contains("{{"));
        assert!(html.contains("const SIZE = 640;"));
        assert!(html.contains("(3 classes configured)"));
    }
}
