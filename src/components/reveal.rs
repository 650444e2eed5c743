use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of the element that must be visible before it reveals.
const VISIBLE_THRESHOLD: f64 = 0.1;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a `fade-up` block that gains the `show` class the
/// first time it scrolls into view. Each element reveals exactly once: the
/// observer unobserves the node in the same frame that applies the class,
/// and the whole observer is disconnected on unmount.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer_handle: Option<IntersectionObserver> = None;
                let mut callback_handle: Option<Closure<dyn FnMut(Array, IntersectionObserver)>> =
                    None;

                if let Some(target) = node.cast::<Element>() {
                    let callback = Closure::wrap(Box::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if !entry.is_intersecting() {
                                    continue;
                                }
                                // Defer the class flip to the next paint frame,
                                // then stop tracking this element for good.
                                let element = entry.target();
                                let observer = observer.clone();
                                let frame = Closure::once_into_js(move || {
                                    let _ = element.class_list().add_1("show");
                                    observer.unobserve(&element);
                                });
                                if let Some(window) = web_sys::window() {
                                    let _ = window.request_animation_frame(frame.unchecked_ref());
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let mut options = IntersectionObserverInit::new();
                    options.threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));

                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        observer.observe(&target);
                        observer_handle = Some(observer);
                    }
                    callback_handle = Some(callback);
                }

                move || {
                    if let Some(observer) = observer_handle {
                        observer.disconnect();
                    }
                    drop(callback_handle);
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!("fade-up", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
