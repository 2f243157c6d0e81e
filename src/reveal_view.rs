use std::rc::Rc;

use arukoto_core::{Media, MediaKind, Point, RevealAction, RevealState, SiteConfig};
use gloo::events::EventListener;
use gloo::file::callbacks::FileReader;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, Event, HtmlInputElement, HtmlVideoElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::drag_listeners::DragListeners;
use crate::input::{client_to_local, element_size, mouse_client_point, touch_client_point};
use crate::media_upload;
use crate::viewport;

const FRAME_VIEW_BOX: &str = "0 0 77.86 77.86";
const CONTAINER_STYLE: &str = "position: relative; width: 100%; height: 100vh; overflow: hidden; \
     touch-action: none; overscroll-behavior: none; user-select: none; \
     -webkit-user-select: none; -webkit-touch-callout: none;";
const HINT_JA: &str = "四角をドラッグしてみてください！";
const HINT_EN: &str = "Try to drag the square shape!";
const UPLOAD_JA: &str = "画像・動画をアップロード";
const UPLOAD_EN: &str = "Upload Image/Video";
const CHANGE_JA: &str = "メディアを変更";
const CHANGE_EN: &str = "Change Media";

#[derive(Clone, PartialEq)]
struct RevealModel(RevealState);

impl Reducible for RevealModel {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: RevealAction) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.0.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Properties)]
pub(crate) struct RevealViewProps {
    pub(crate) config: Rc<SiteConfig>,
}

impl PartialEq for RevealViewProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
    }
}

#[function_component(RevealView)]
pub(crate) fn reveal_view(props: &RevealViewProps) -> Html {
    let config = props.config.clone();
    let policy = config.reveal.policy;
    let reveal = use_reducer(move || RevealModel(RevealState::new(policy)));
    let container_ref = use_node_ref();
    let file_input_ref = use_node_ref();
    let pending_read = use_mut_ref(|| None::<FileReader>);
    let on_action = {
        let dispatcher = reveal.dispatcher();
        Callback::from(move |action: RevealAction| dispatcher.dispatch(action))
    };

    {
        let container_ref = container_ref.clone();
        let on_action = on_action.clone();
        use_effect_with((), move |_| {
            let relayout: Rc<dyn Fn()> = Rc::new(move || {
                let Some(viewport) = viewport::viewport_size() else {
                    return;
                };
                let Some(container) = container_ref.cast::<Element>() else {
                    return;
                };
                on_action.emit(RevealAction::Relayout {
                    viewport,
                    container: element_size(&container),
                });
            });
            relayout();
            gloo::console::log!("reveal view mounted");
            let listeners = viewport::subscribe(relayout);
            move || drop(listeners)
        });
    }

    let dragging = reveal.0.is_dragging();
    {
        let container_ref = container_ref.clone();
        let on_action = on_action.clone();
        use_effect_with(dragging, move |dragging| {
            let listeners = if *dragging {
                DragListeners::attach(container_ref, on_action)
            } else {
                None
            };
            move || drop(listeners)
        });
    }

    {
        let file_input_ref = file_input_ref.clone();
        let on_action = on_action.clone();
        use_effect_with((), move |_| {
            // Dismissing the picker fires `cancel` instead of `change`.
            let listener = file_input_ref.cast::<Element>().map(|input| {
                EventListener::new(&input, "cancel", move |_event: &Event| {
                    on_action.emit(RevealAction::CloseUploadPrompt);
                })
            });
            move || drop(listener)
        });
    }

    let begin_drag = {
        let container_ref = container_ref.clone();
        let on_action = on_action.clone();
        move |client: Point| {
            let Some(container) = container_ref.cast::<Element>() else {
                return;
            };
            let (contact, _) = client_to_local(client, &container);
            on_action.emit(RevealAction::BeginDrag { contact });
        }
    };
    let on_mouse_down = {
        let begin_drag = begin_drag.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            begin_drag(mouse_client_point(&event));
        })
    };
    let on_touch_start = Callback::from(move |event: TouchEvent| {
        event.prevent_default();
        event.stop_propagation();
        if let Some(client) = touch_client_point(&event) {
            begin_drag(client);
        }
    });

    let on_upload_click = {
        let file_input_ref = file_input_ref.clone();
        let on_action = on_action.clone();
        Callback::from(move |_event: MouseEvent| {
            let Some(input) = file_input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            on_action.emit(RevealAction::OpenUploadPrompt);
            input.click();
        })
    };
    let on_file_change = {
        let on_action = on_action.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            input.set_value("");
            let Some(file) = file else {
                on_action.emit(RevealAction::CloseUploadPrompt);
                return;
            };
            let on_done = {
                let on_action = on_action.clone();
                Callback::from(move |media: Option<Media>| {
                    on_action.emit(match media {
                        Some(media) => RevealAction::SetMedia(media),
                        None => RevealAction::CloseUploadPrompt,
                    });
                })
            };
            // A rejected selection leaves any read still in flight alone.
            match media_upload::read_media(file, on_done) {
                Some(reader) => *pending_read.borrow_mut() = Some(reader),
                None => on_action.emit(RevealAction::CloseUploadPrompt),
            }
        })
    };

    let state = &reveal.0;
    let background = match state.media.uploaded_src() {
        Some(src) => AttrValue::from(src.clone()),
        None => AttrValue::from(config.assets.default_background.clone()),
    };
    let is_video = state.media.kind() == Some(MediaKind::Video);
    let clip = state.clip_polygon().to_string();
    let blurred_style = AttrValue::from(format!(
        "clip-path: {clip}; -webkit-clip-path: {clip}; filter: blur({}px);",
        config.reveal.blur_px
    ));
    let sharp_layer = media_layer(&background, is_video, "Background image", None);
    let blurred_layer = media_layer(
        &background,
        is_video,
        "Blurred background",
        Some(blurred_style),
    );

    let origin = state.frame_origin();
    let side = state.window_size;
    let frame_style = format!(
        "position: absolute; left: {}px; top: {}px; width: {side}px; height: {side}px; \
         transform: translate3d(0, 0, 0); touch-action: none;",
        origin.x, origin.y
    );
    let frame_class = classes!("reveal-frame", dragging.then_some("is-dragging"));

    let (upload_ja, upload_en) = if state.media.is_uploaded() {
        (CHANGE_JA, CHANGE_EN)
    } else {
        (UPLOAD_JA, UPLOAD_EN)
    };
    let upload_busy = if state.upload_prompt_open { "true" } else { "false" };

    let bottom = if state.compact {
        html! {
            <div class="reveal-bottom reveal-bottom-compact">
                <img src={config.assets.mobile_bottom.clone()} alt="Mobile bottom content" />
            </div>
        }
    } else {
        html! {
            <div class="reveal-bottom">
                <a
                    class="reveal-social"
                    href={config.social.url.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <img src={config.assets.social_icon.clone()} alt={config.social.label.clone()} />
                </a>
            </div>
        }
    };

    html! {
        <div ref={container_ref} class="reveal-root" style={CONTAINER_STYLE}>
            <div class="reveal-layer">{sharp_layer}</div>
            <div class="reveal-layer">{blurred_layer}</div>
            <div class="reveal-overlay">
                <img src={config.assets.overlay.clone()} alt="Background overlay" />
            </div>
            <div
                class={frame_class}
                style={frame_style}
                onmousedown={on_mouse_down}
                ontouchstart={on_touch_start}
            >
                <svg
                    class="reveal-frame-outline"
                    width="100%"
                    height="100%"
                    viewBox={FRAME_VIEW_BOX}
                    preserveAspectRatio="xMidYMid meet"
                >
                    <rect
                        x="3.89"
                        y="3.89"
                        width="70.07"
                        height="70.07"
                        fill="none"
                        stroke="white"
                        stroke-width="7.79"
                        stroke-miterlimit="10"
                    />
                </svg>
            </div>
            <div class="reveal-controls">
                <div class="reveal-hint">
                    <div>{ HINT_JA }</div>
                    <div class="reveal-subtitle">{ HINT_EN }</div>
                </div>
                <button
                    type="button"
                    class="reveal-upload"
                    aria-busy={upload_busy}
                    onclick={on_upload_click}
                >
                    <div>{ upload_ja }</div>
                    <div class="reveal-subtitle">{ upload_en }</div>
                </button>
            </div>
            <div class="reveal-logo">
                <img src={config.assets.logo.clone()} alt="Logo" />
            </div>
            {bottom}
            <input
                ref={file_input_ref}
                class="reveal-file-input"
                type="file"
                accept="image/*,video/*"
                hidden=true
                onchange={on_file_change}
            />
        </div>
    }
}

fn media_layer(
    src: &AttrValue,
    is_video: bool,
    alt: &'static str,
    style: Option<AttrValue>,
) -> Html {
    let class = classes!("reveal-media", style.is_some().then_some("reveal-media-blurred"));
    if is_video {
        html! { <BackgroundVideo src={src.clone()} {class} {style} /> }
    } else {
        html! { <img src={src.clone()} {alt} {class} {style} draggable="false" /> }
    }
}

#[derive(Properties, PartialEq)]
struct BackgroundVideoProps {
    src: AttrValue,
    class: Classes,
    style: Option<AttrValue>,
}

#[function_component(BackgroundVideo)]
fn background_video(props: &BackgroundVideoProps) -> Html {
    let video_ref = use_node_ref();
    {
        let video_ref = video_ref.clone();
        use_effect_with(props.src.clone(), move |_| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                // Autoplay needs the muted property, not just the attribute.
                video.set_muted(true);
                match video.play() {
                    Ok(promise) => spawn_local(async move {
                        if let Err(err) = JsFuture::from(promise).await {
                            gloo::console::warn!("background video did not autoplay", err);
                        }
                    }),
                    Err(err) => {
                        gloo::console::warn!("background video play failed", err);
                    }
                }
            }
            || ()
        });
    }
    html! {
        <video
            ref={video_ref}
            src={props.src.clone()}
            class={props.class.clone()}
            style={props.style.clone()}
            autoplay=true
            loop=true
            muted=true
            playsinline=true
        />
    }
}
