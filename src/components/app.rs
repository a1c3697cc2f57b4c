use super::{
    card_state::{CardAction, CardState},
    readout_panel::ReadoutPanel,
    settings_panel::SettingsPanel,
    surface_view::SurfaceView,
};
use transform_gesture::util::clog;
use transform_gesture::{GestureOptions, Point};
use yew::prelude::*;

const OPTIONS_KEY: &str = "tg_gesture_options";
const CARD_ORIGIN: Point = Point::new(120.0, 160.0);

fn load_options() -> GestureOptions {
    let default = GestureOptions {
        can_rotate: true,
        can_scale: true,
        ..Default::default()
    };
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(Some(raw)) = store.get_item(OPTIONS_KEY) {
                match GestureOptions::from_json(&raw) {
                    Ok(options) => return options,
                    Err(err) => clog(&format!("ignoring stored options: {}", err)),
                }
            }
        }
    }
    default
}

#[function_component(App)]
pub fn app() -> Html {
    let options = use_state(load_options);
    let card = use_reducer(|| CardState::new(CARD_ORIGIN));

    // Persist options
    {
        use_effect_with(*options, move |options| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(raw) = options.to_json() {
                        let _ = store.set_item(OPTIONS_KEY, &raw);
                    }
                }
            }
            || ()
        });
    }

    let on_change = {
        let options = options.clone();
        Callback::from(move |next: GestureOptions| options.set(next))
    };
    let on_reset_card = {
        let card = card.clone();
        Callback::from(move |_| card.dispatch(CardAction::Reset { origin: CARD_ORIGIN }))
    };

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; color:#c9d1d9; font-family:sans-serif;">
            <SurfaceView options={*options} card={card.clone()} />
            <ReadoutPanel phase={card.last_phase} event={card.last_event} changes_per_sec={card.changes_per_sec} />
            <SettingsPanel options={*options} on_change={on_change} on_reset_card={on_reset_card} />
        </div>
    }
}
