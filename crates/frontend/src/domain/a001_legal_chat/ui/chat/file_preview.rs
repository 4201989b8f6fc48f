use crate::shared::config::config;
use crate::shared::icons::icon;
use contracts::domain::a001_legal_chat::FilePreview;
use leptos::prelude::*;
use thaw::*;

/// Name and beginning of the extracted text of the attached file
#[component]
pub fn FilePreviewCard(preview: FilePreview, on_clear: Callback<()>) -> impl IntoView {
    let snippet = preview
        .has_text()
        .then(|| preview.snippet(config().ui.preview_chars));

    view! {
        <div class="file-preview-container">
            <div class="file-preview">
                <span class="file-preview__name">
                    {icon("document")}
                    " "
                    {preview.name.clone()}
                </span>
                {snippet.map(|text| view! {
                    <div class="extracted-text-preview">
                        <small>"Extracted text:"</small>
                        <p>{text}</p>
                    </div>
                })}
            </div>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| on_clear.run(())
                class="clear-file-button"
            >
                {icon("close")}
                " Clear"
            </Button>
        </div>
    }
}
