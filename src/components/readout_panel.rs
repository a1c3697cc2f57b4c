use transform_gesture::{GestureEvent, GesturePhase};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReadoutPanelProps {
    pub phase: Option<GesturePhase>,
    pub event: Option<GestureEvent>,
    pub changes_per_sec: f64,
}

#[function_component]
pub fn ReadoutPanel(props: &ReadoutPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // label | value
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:120px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let phase = match props.phase {
        Some(GesturePhase::Start) => "start",
        Some(GesturePhase::Change) => "change",
        Some(GesturePhase::End) => "end",
        None => "idle",
    };
    let (count, translation, scale, rotation, centroid) = match &props.event {
        Some(e) => (
            e.pointer_count.to_string(),
            format!("{:.1}, {:.1}", e.translation.x, e.translation.y),
            format!("{:.3}", e.scale),
            format!("{:.1}°", e.rotation.to_degrees()),
            e.centroid
                .map(|c| format!("{:.1}, {:.1}", c.x, c.y))
                .unwrap_or_else(|| "-".into()),
        ),
        None => ("0".into(), "-".into(), "-".into(), "-".into(), "-".into()),
    };
    let raw = props
        .event
        .as_ref()
        .and_then(|e| serde_json::to_string(e).ok())
        .unwrap_or_default();
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:260px; display:flex; flex-direction:column; gap:8px; font-size:14px; pointer-events:none;">
            <div style={row_style}>
                <span style={label_style}>{"Phase"}</span>
                <span style={value_style}>{ phase }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Pointers"}</span>
                <span style={value_style}>{ count }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Translation"}</span>
                <span style={value_style}>{ translation }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Scale"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ scale }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Rotation"}</span>
                <span style={format!("{} color:#d4af37;", value_style)}>{ rotation }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Centroid"}</span>
                <span style={value_style}>{ centroid }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Changes/s"}</span>
                <span style={value_style}>{ format!("{:.0}", props.changes_per_sec) }</span>
            </div>
            <div style="font-size:10px; opacity:0.6; word-break:break-all; max-width:260px;">{ raw }</div>
        </div>
    }
}
