use arukoto_core::{Media, MediaKind};
use gloo::file::callbacks::{read_as_data_url, FileReader};
use yew::Callback;

/// Starts reading `file` into a data URL.
///
/// Returns `None` without reading when the declared type is neither an image
/// nor a video. `on_done` receives `None` if the read itself fails. The read
/// is aborted if the returned reader is dropped first.
pub(crate) fn read_media(
    file: web_sys::File,
    on_done: Callback<Option<Media>>,
) -> Option<FileReader> {
    let mime = file.type_();
    let Some(kind) = MediaKind::from_mime(&mime) else {
        gloo::console::warn!("upload ignored, unsupported type", mime, file.name());
        return None;
    };
    let file = gloo::file::File::from(file);
    let reader = read_as_data_url(&file, move |result| match result {
        Ok(src) => on_done.emit(Some(Media::from_upload(kind, src))),
        Err(err) => {
            gloo::console::warn!("upload read failed", err.to_string());
            on_done.emit(None);
        }
    });
    Some(reader)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::test_support::{test_file, wait_until};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn unsupported_type_starts_no_read() {
        let file = test_file("%PDF-1.7", "flyer.pdf", "application/pdf");
        let reader = read_media(file, Callback::from(|_| panic!("no read expected")));
        assert!(reader.is_none());
    }

    #[wasm_bindgen_test(async)]
    async fn image_file_becomes_image_media() {
        let file = test_file("not really a png", "shot.png", "image/png");
        let done = Rc::new(RefCell::new(None::<Option<Media>>));
        let reader = {
            let done = done.clone();
            read_media(
                file,
                Callback::from(move |media| *done.borrow_mut() = Some(media)),
            )
        };
        assert!(reader.is_some());
        assert!(wait_until(|| done.borrow().is_some()).await, "read never finished");

        let media = done.borrow_mut().take().flatten().expect("media read");
        assert_eq!(media.kind(), Some(MediaKind::Image));
        let src = media.uploaded_src().expect("uploaded source");
        assert!(src.starts_with("data:image/png"), "unexpected src {src}");
        drop(reader);
    }
}
