//! Browser binding: finds player markup, wires DOM listeners to the
//! controller, and renders each widget's display back into the page.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::{info, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, Element, HtmlAudioElement, HtmlElement, MouseEvent};

use super::controller::{ControllerError, PlaybackRejected, PlayerController, Toggle};
use super::markup::*;
use super::media::MediaHandle;
use super::widget::{Glyph, WidgetDisplay};

pub struct WebMedia(HtmlAudioElement);

impl MediaHandle for WebMedia {
    type PlayRequest = Result<js_sys::Promise, JsValue>;

    fn paused(&self) -> bool {
        self.0.paused()
    }

    fn play(&self) -> Self::PlayRequest {
        self.0.play()
    }

    fn pause(&self) {
        let _ = self.0.pause();
    }

    fn duration(&self) -> f64 {
        self.0.duration()
    }

    fn current_time(&self) -> f64 {
        self.0.current_time()
    }

    fn set_current_time(&self, seconds: f64) {
        self.0.set_current_time(seconds);
    }
}

/// The visible parts of one widget.
struct DomView {
    play_icon: Element,
    pause_icon: Element,
    fill: HtmlElement,
    elapsed: Element,
    total: Element,
}

impl DomView {
    fn render(&self, display: &WidgetDisplay) {
        let (shown, hidden) = match display.glyph {
            Glyph::Play => (&self.play_icon, &self.pause_icon),
            Glyph::Pause => (&self.pause_icon, &self.play_icon),
        };
        let _ = shown.class_list().remove_1(HIDDEN_CLASS);
        let _ = hidden.class_list().add_1(HIDDEN_CLASS);
        let _ = self
            .fill
            .style()
            .set_property("width", &format!("{}%", display.fill_percent));
        self.elapsed.set_text_content(Some(&display.elapsed));
        self.total.set_text_content(Some(&display.total));
    }
}

/// Everything required from one `.audio-player` container, looked up once.
struct WidgetParts {
    id: String,
    toggle: Element,
    media: HtmlAudioElement,
    track: Element,
    view: DomView,
}

impl WidgetParts {
    fn discover(index: usize, container: &Element) -> Result<Self, MarkupError> {
        let parts = PlayerParts::discover(index, |selector| {
            container.query_selector(selector).ok().flatten()
        })?;

        let media: HtmlAudioElement = parts.media.dyn_into().map_err(|_| {
            MarkupError::MissingPart {
                index,
                selector: MEDIA_SELECTOR,
            }
        })?;
        let fill: HtmlElement = parts.fill.dyn_into().map_err(|_| {
            MarkupError::MissingPart {
                index,
                selector: FILL_SELECTOR,
            }
        })?;

        let id = resolve_widget_id(
            index,
            parts.toggle.get_attribute(TOGGLE_ID_ATTR),
            media.get_attribute(MEDIA_ID_ATTR),
        )?;

        Ok(Self {
            id,
            toggle: parts.toggle,
            media,
            track: parts.track,
            view: DomView {
                play_icon: parts.play_icon,
                pause_icon: parts.pause_icon,
                fill,
                elapsed: parts.elapsed,
                total: parts.total,
            },
        })
    }
}

/// Failure to attach one container.
#[derive(Debug, thiserror::Error)]
enum AttachError {
    #[error(transparent)]
    Markup(#[from] MarkupError),
    #[error(transparent)]
    Controller(#[from] ControllerError),
}

#[derive(Default)]
struct PlayerPage {
    controller: PlayerController<WebMedia>,
    views: Vec<(String, DomView)>,
}

impl PlayerPage {
    fn render(&self, id: &str) {
        if let (Some(display), Some((_, view))) = (
            self.controller.display(id),
            self.views.iter().find(|(view_id, _)| view_id == id),
        ) {
            view.render(display);
        }
    }

    fn render_all(&self) {
        for (id, view) in &self.views {
            if let Some(display) = self.controller.display(id) {
                view.render(display);
            }
        }
    }
}

type SharedPage = Rc<RefCell<PlayerPage>>;

type MediaOp = fn(&mut PlayerController<WebMedia>, &str) -> Result<(), ControllerError>;

/// Attach a controller to every player currently in the document.
///
/// Each container is validated on its own; a malformed one is logged and
/// skipped without affecting its siblings. Returns the number attached.
pub fn attach_players() -> usize {
    let Some(document) = window().and_then(|w| w.document()) else {
        return 0;
    };
    let Ok(containers) = document.query_selector_all(PLAYER_SELECTOR) else {
        return 0;
    };

    let page: SharedPage = Rc::new(RefCell::new(PlayerPage::default()));
    let containers = (0..containers.length())
        .filter_map(|index| containers.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok());
    let attached = attach_each(containers, |index, container| -> Result<(), AttachError> {
        let parts = WidgetParts::discover(index, &container)?;
        wire(&page, parts)?;
        Ok(())
    });

    info!("attached {attached} audio player(s)");
    attached
}

fn wire(page: &SharedPage, parts: WidgetParts) -> Result<(), ControllerError> {
    let WidgetParts {
        id,
        toggle,
        media,
        track,
        view,
    } = parts;

    {
        let mut page = page.borrow_mut();
        let initial_total = view.total.text_content().unwrap_or_default();
        page.controller
            .register(id.clone(), WebMedia(media.clone()), &initial_total)?;
        page.views.push((id.clone(), view));
        page.render(&id);
    }

    // iOS only reports a duration after an explicit load.
    media.load();

    {
        let page = page.clone();
        let id = id.clone();
        let click = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            on_toggle(&page, &id);
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = toggle.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
        click.forget();
    }

    let media_events: [(&str, MediaOp); 5] = [
        ("timeupdate", PlayerController::time_update),
        ("loadedmetadata", PlayerController::duration_ready),
        // Some browsers never report a usable duration on loadedmetadata.
        ("canplaythrough", PlayerController::duration_ready),
        ("error", PlayerController::media_error),
        ("ended", PlayerController::ended),
    ];
    for (event, op) in media_events {
        listen_media(page, &media, event, &id, op);
    }

    {
        let page = page.clone();
        let id = id.clone();
        let bar = track.clone();
        let seek = Closure::wrap(Box::new(move |event: MouseEvent| {
            let rect = bar.get_bounding_client_rect();
            let mut page = page.borrow_mut();
            if let Err(err) =
                page.controller
                    .seek(&id, event.client_x() as f64, rect.left(), rect.width())
            {
                warn!("{err}");
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = track.add_event_listener_with_callback("click", seek.as_ref().unchecked_ref());
        seek.forget();
    }

    Ok(())
}

fn listen_media(page: &SharedPage, media: &HtmlAudioElement, event: &str, id: &str, op: MediaOp) {
    let page = page.clone();
    let id = id.to_string();
    let callback = Closure::wrap(Box::new(move || {
        let mut page = page.borrow_mut();
        match op(&mut page.controller, &id) {
            Ok(()) => page.render(&id),
            Err(err) => warn!("{err}"),
        }
    }) as Box<dyn FnMut()>);
    let _ = media.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    callback.forget();
}

fn on_toggle(page: &SharedPage, id: &str) {
    let toggle = {
        let mut page = page.borrow_mut();
        let toggle = page.controller.toggle(id);
        page.render_all();
        toggle
    };

    match toggle {
        Ok(Toggle::Requested(request)) => {
            let page = page.clone();
            let id = id.to_string();
            spawn_local(async move {
                let outcome = match request {
                    Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
                    Err(err) => Err(err),
                }
                .map_err(|err| PlaybackRejected(describe_js(&err)));

                let mut page = page.borrow_mut();
                match page.controller.play_settled(&id, outcome) {
                    Ok(()) => page.render(&id),
                    Err(err) => warn!("{err}"),
                }
            });
        }
        Ok(Toggle::Paused | Toggle::Unavailable) => {}
        Err(err) => warn!("{err}"),
    }
}

fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
