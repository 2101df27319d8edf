// File: crates/decade-page/src/lib.rs
// Summary: Page composition; embedded decade documents, static page text and the HTML shell around the chart SVG.

use decade_chart::svg::{escape, to_svg};
use decade_chart::tooltip::{CURSOR_OFFSET, FADE_IN, INITIAL_STYLE};
use decade_chart::{ChartData, ChartResult, Scene, Theme};

/// Aggregated rating/budget/revenue/genre series, one record per decade.
pub const DATA_JSON: &str = include_str!("../static/average-rating-by-decade.json");
/// Min/max bounds over the series.
pub const META_JSON: &str = include_str!("../static/metadata.json");

pub const DATA_FILE: &str = "average-rating-by-decade.json";
pub const META_FILE: &str = "metadata.json";

/// The dataset baked into the binary.
pub fn embedded_data() -> ChartResult<ChartData> {
    ChartData::from_documents(DATA_JSON, META_JSON)
}

/// Read both documents from `dir` instead of the embedded copies.
pub fn load_dir(dir: impl AsRef<std::path::Path>) -> ChartResult<ChartData> {
    let dir = dir.as_ref();
    ChartData::load(dir.join(DATA_FILE), dir.join(META_FILE))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContent {
    pub title: String,
    pub description: String,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            title: "Movies By Decade".to_string(),
            description: "The graph shows average IMDB scores from each decade from 1910 - 2020 \
                along with the average movie budget and revenue. The word clouds show popular \
                movie genres in each decade."
                .to_string(),
        }
    }
}

fn script() -> String {
    format!(
        r#"(function () {{
  var tip = document.getElementById("tooltip");
  function clear() {{ while (tip.firstChild) tip.removeChild(tip.firstChild); }}
  document.querySelectorAll("circle.marker").forEach(function (m) {{
    m.addEventListener("mouseover", function () {{
      clear();
      (m.getAttribute("data-tooltip") || "").split("\n").forEach(function (line) {{
        var div = document.createElement("div");
        div.textContent = line;
        tip.appendChild(div);
      }});
      tip.style.transition = "opacity {fade}ms ease-in-out";
      tip.style.opacity = 1;
    }});
    m.addEventListener("mouseout", function () {{
      tip.style.transition = "none";
      tip.style.opacity = 0;
      clear();
    }});
    m.addEventListener("mousemove", function (e) {{
      tip.style.left = (e.pageX + ({dx})) + "px";
      tip.style.top = (e.pageY + ({dy})) + "px";
    }});
  }});
}})();"#,
        fade = FADE_IN.as_millis(),
        dx = CURSOR_OFFSET.0,
        dy = CURSOR_OFFSET.1,
    )
}

/// Full HTML document: heading, description, tooltip container and the chart.
pub fn compose_html(scene: &Scene, theme: &Theme, content: &PageContent) -> String {
    let svg = to_svg(scene, theme);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body {{ margin: 0; background: {bg}; color: {fg}; font-family: sans-serif; }}
  .page {{ padding: 2.5rem; width: fit-content; }}
  .intro {{ margin-left: 10rem; max-width: 42rem; }}
  .intro h1 {{ font-size: 3rem; font-family: serif; margin: 0; }}
  .intro p {{ margin-top: 1rem; font-size: 1.5rem; }}
  #tooltip {{ background: {tip_bg}; color: {tip_fg}; padding: 0.5rem; pointer-events: none; }}
</style>
</head>
<body>
<div class="page">
<div class="intro">
<h1>{title}</h1>
<p>{description}</p>
</div>
<div id="tooltip" style="{initial}"></div>
{svg}</div>
<script>
{script}
</script>
</body>
</html>
"#,
        title = escape(&content.title),
        description = escape(&content.description),
        bg = theme.background.to_hex(),
        fg = theme.foreground.to_hex(),
        tip_bg = theme.tooltip_background.to_hex(),
        tip_fg = theme.tooltip_text.to_hex(),
        initial = INITIAL_STYLE,
        svg = svg,
        script = script(),
    )
}
