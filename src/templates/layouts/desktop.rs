use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
body {
  margin: 0;
  min-height: 100vh;
  color: #ffffff;
  font-family: 'Segoe UI', system-ui, sans-serif;
  background: linear-gradient(-45deg, #1a1a1a, #2e2e2e, #3d3d3d, #4a4a4a);
  background-size: 400% 400%;
  animation: gradient 15s ease infinite;
}
@keyframes gradient {
  0% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
  100% { background-position: 0% 50%; }
}
.container { max-width: 760px; margin: 0 auto; padding: 2rem 1rem 4rem; }
h1, h2, h3 { text-align: center; }
.card { background: #4a4a4a; border-radius: 12px; padding: 20px; margin-bottom: 15px; box-shadow: 0 2px 12px rgba(0,0,0,0.08); }
.field { display: flex; flex-direction: column; margin-bottom: 12px; }
.field input { background: #3a3a3a; color: #fff; border: none; border-radius: 12px; padding: 10px; font-size: 1rem; }
button { background: #005fa3; color: #fff; font-weight: 600; border: none; border-radius: 12px; padding: 10px 25px; width: 100%; cursor: pointer; }
button:hover { background: #004080; }
button.link { background: transparent; color: #9ca3af; width: auto; font-weight: 400; text-decoration: underline; }
.success { background: #d2f0fc; color: #0b3954; border-left: 5px solid #3399ff; padding: 20px; border-radius: 10px; font-size: 1.3em; text-align: center; }
.error { background: #5c1f1f; border-left: 5px solid #ff3333; padding: 12px 16px; border-radius: 10px; }
.info { background: #1f3a5c; border-left: 5px solid #3399ff; padding: 12px 16px; border-radius: 10px; }
#location-map { width: 100%; max-width: 700px; height: 300px; border-radius: 12px; margin: 0 auto; }
.attribution { font-size: 0.8em; color: #bbb; }
table { width: 100%; border-collapse: collapse; }
th, td { padding: 8px; border-bottom: 1px solid #5a5a5a; text-align: left; }
input[type=range] { width: 100%; accent-color: #00cc00; }
"#;

/// Draws the Leaflet map for any `#location-map` element, on first load
/// and after every htmx swap.
const MAP_SCRIPT: &str = r#"
function renderLocationMap() {
  var el = document.getElementById('location-map');
  if (!el || !window.L || el.dataset.rendered) return;
  el.dataset.rendered = '1';
  var lat = parseFloat(el.dataset.lat), lon = parseFloat(el.dataset.lon);
  var map = L.map(el).setView([lat, lon], 10);
  L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', { maxZoom: 19 }).addTo(map);
  L.marker([lat, lon]).addTo(map).bindPopup(el.dataset.popup).bindTooltip(el.dataset.tooltip);
}
document.addEventListener('DOMContentLoaded', renderLocationMap);
document.addEventListener('htmx:afterSwap', renderLocationMap);
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
                script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" defer {}
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
                style { (PreEscaped(STYLES)) }
            }
            body {
                (content)
                script { (PreEscaped(MAP_SCRIPT)) }
            }
        }
    }
}
