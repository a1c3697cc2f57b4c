use transform_gesture::web::GestureBinding;
use transform_gesture::{FnSink, GestureConfig, GestureEvent, GestureOptions, Point};
use web_sys::HtmlElement;
use yew::prelude::*;

use super::card_state::{CARD_SIZE, CardAction, CardState};
use transform_gesture::util::{clog, cwarn};

#[derive(Properties, PartialEq, Clone)]
pub struct SurfaceViewProps {
    pub options: GestureOptions,
    pub card: UseReducerHandle<CardState>,
}

#[function_component(SurfaceView)]
pub fn surface_view(props: &SurfaceViewProps) -> Html {
    let surface_ref = use_node_ref();

    // (Re)attach the gesture whenever options change; capabilities are fixed per instance.
    {
        let surface_ref = surface_ref.clone();
        let card = props.card.clone();
        use_effect_with(props.options, move |options| {
            let options = *options;
            let mut binding = None;
            if let Some(surface) = surface_ref.cast::<HtmlElement>() {
                let mapping_el = surface.clone();
                let sink_card = card.clone();
                let config = GestureConfig::new()
                    .with_options(options)
                    .map(|config| {
                        config
                            .with_coordinate_transformation(move |p: Point| {
                                let rect = mapping_el.get_bounding_client_rect();
                                Point::new(p.x - rect.left(), p.y - rect.top())
                            })
                            .with_sink(FnSink(move |phase, event: &GestureEvent| {
                                sink_card.dispatch(CardAction::Gesture {
                                    phase,
                                    event: *event,
                                    can_translate: options.can_translate,
                                    now_ms: js_sys::Date::now(),
                                });
                            }))
                    });
                match config {
                    Ok(config) => match GestureBinding::attach(&surface, config) {
                        Ok(b) => {
                            clog(&format!("gesture attached: {:?}", options));
                            binding = Some(b);
                        }
                        Err(err) => cwarn(&format!("gesture attach failed: {:?}", err)),
                    },
                    Err(err) => cwarn(&err.to_string()),
                }
            }
            move || drop(binding)
        });
    }

    let card_style = format!(
        "position:absolute; left:0; top:0; width:{size}px; height:{size}px; transform-origin:0 0; transform:{t}; \
         background:linear-gradient(135deg,#58a6ff,#8957e5); border-radius:12px; box-shadow:0 6px 24px rgba(0,0,0,0.5); \
         display:flex; align-items:center; justify-content:center; color:#fff; font-weight:600; pointer-events:none;",
        size = CARD_SIZE,
        t = props.card.css_transform()
    );
    let live = props.card.last_event.map(|e| e.pointer_count).unwrap_or(0);

    html! {
        <div ref={surface_ref} style="position:relative; width:100vw; height:100vh; overflow:hidden; touch-action:none; user-select:none; background:#0d1117;">
            <div style={card_style}>{ if live > 0 { format!("{} pointer(s)", live) } else { "Drag me".to_string() } }</div>
        </div>
    }
}
