use transform_gesture::GestureOptions;
use yew::prelude::*;

const THROTTLE_CHOICES: [u32; 3] = [1, 16, 50];

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsPanelProps {
    pub options: GestureOptions,
    pub on_change: Callback<GestureOptions>,
    pub on_reset_card: Callback<()>,
}

#[function_component]
pub fn SettingsPanel(props: &SettingsPanelProps) -> Html {
    let toggle = |f: fn(&mut GestureOptions)| {
        let cb = props.on_change.clone();
        let options = props.options;
        Callback::from(move |_| {
            let mut next = options;
            f(&mut next);
            cb.emit(next)
        })
    };
    let toggle_translate = toggle(|o| o.can_translate = !o.can_translate);
    let toggle_rotate = toggle(|o| o.can_rotate = !o.can_rotate);
    let toggle_scale = toggle(|o| o.can_scale = !o.can_scale);
    let cycle_throttle = toggle(|o| {
        let idx = THROTTLE_CHOICES.iter().position(|&ms| ms == o.throttle_ms).unwrap_or(0);
        o.throttle_ms = THROTTLE_CHOICES[(idx + 1) % THROTTLE_CHOICES.len()];
    });
    let reset_cb = {
        let cb = props.on_reset_card.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; min-width:200px; display:flex; flex-direction:column; gap:8px;">
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={props.options.can_translate} onclick={toggle_translate} />
            <span>{"Translate"}</span>
        </label>
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={props.options.can_rotate} onclick={toggle_rotate} />
            <span>{"Rotate"}</span>
        </label>
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={props.options.can_scale} onclick={toggle_scale} />
            <span>{"Scale"}</span>
        </label>
        <button onclick={cycle_throttle}>{ format!("Throttle: {} ms", props.options.throttle_ms) }</button>
        <button onclick={reset_cb}>{"Reset Card"}</button>
        <div style="font-size:11px; opacity:0.7;">{"Changing options rebuilds the gesture."}</div>
    </div>}
}
