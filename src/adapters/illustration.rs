use crate::domain::story::Illustration;

pub const WIDTH: u32 = 400;
pub const HEIGHT: u32 = 300;
const MAX_SCENE_CHARS: usize = 100;
const LINE_HEIGHT: u32 = 14;

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Placeholder picture for a scene: ivory canvas with the scene text in black.
pub fn placeholder(index: usize, scene_text: &str) -> Illustration {
    let truncated: String = scene_text.chars().take(MAX_SCENE_CHARS).collect();
    let text = format!("Illustration:\n{}", truncated);

    let lines: Vec<String> = text
        .lines()
        .enumerate()
        .map(|(row, line)| {
            format!(
                r#"<text x="10" y="{}" font-family="monospace" font-size="11" fill="rgb(0,0,0)">{}</text>"#,
                10 + LINE_HEIGHT * (row as u32 + 1),
                escape_xml(line)
            )
        })
        .collect();

    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect width="{w}" height="{h}" fill="rgb(255,255,240)"/>{body}</svg>"#,
        w = WIDTH,
        h = HEIGHT,
        body = lines.join("")
    );

    Illustration {
        caption: format!("Scene {}", index + 1),
        scene_text: scene_text.to_string(),
        svg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_layout() {
        let illustration = placeholder(0, "Scene 1: The adventure begins.");
        assert_eq!(illustration.caption, "Scene 1");
        assert!(illustration.svg.starts_with("<svg"));
        assert!(illustration.svg.contains(r#"width="400""#));
        assert!(illustration.svg.contains("rgb(255,255,240)"));
        assert!(illustration.svg.contains(">Illustration:</text>"));
        assert!(illustration.svg.contains(">Scene 1: The adventure begins.</text>"));
    }

    #[test]
    fn test_placeholder_truncates_long_scenes() {
        let long_scene = "a".repeat(250);
        let illustration = placeholder(1, &long_scene);
        assert!(illustration.svg.contains(&"a".repeat(100)));
        assert!(!illustration.svg.contains(&"a".repeat(101)));
        assert_eq!(illustration.scene_text.len(), 250);
    }

    #[test]
    fn test_placeholder_escapes_markup() {
        let illustration = placeholder(0, "Tom & <Jerry>");
        assert!(illustration.svg.contains("Tom &amp; &lt;Jerry&gt;"));
    }
}
