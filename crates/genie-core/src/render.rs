//! Render engine - static offline document generation
//!
//! Rendering is a pure function of the cleaned groups, the export config and
//! the export date. Same inputs produce byte-identical output.
//!
//! Every fetched asset is referenced exactly once: previewable files through
//! their preview element, binary files through a download link. Failed files
//! and stray folders carry no asset reference at all.

use time::Date;

use crate::kind::AssetKind;
use crate::snapshot::{CleanFileRef, CleanGroup, ExportConfig};

const TAILWIND_SCRIPT: &str = "https://cdn.tailwindcss.com";
const MODEL_VIEWER_SCRIPT: &str =
    "https://ajax.googleapis.com/ajax/libs/model-viewer/3.3.0/model-viewer.min.js";

const ICON_FOLDER: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-orange-400"><path d="M4 20h16a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.93a2 2 0 0 1-1.66-.9l-.82-1.2A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13c0 1.1.9 2 2 2Z"/></svg>"#;
const ICON_FILE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-gray-400"><path d="M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z"/><polyline points="14 2 14 8 20 8"/></svg>"#;
const ICON_ALERT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-red-500 mb-2"><circle cx="12" cy="12" r="10"/><line x1="12" y1="8" x2="12" y2="12"/><line x1="12" y1="16" x2="12.01" y2="16"/></svg>"#;
const ICON_DOWNLOAD: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" y1="15" x2="12" y2="3"/></svg>"#;
const LOGO: &str = r#"<span style="font-size: 24px; line-height: 1;">🧞</span>"#;

/// Placeholder text for a file whose fetch failed
pub const EXPORT_FAILED: &str = "Export Failed";
/// Placeholder text for a file with no offline preview
pub const BINARY_UNKNOWN: &str = "Binary / Unknown File";
/// Placeholder text for a folder that reached the renderer
pub const UNPROCESSED_DIRECTORY: &str = "Empty or Unprocessed Directory";
/// Notice for a group with no files
pub const EMPTY_GROUP: &str = "Empty Group";

/// Main render engine
pub struct RenderEngine {
    title: String,
}

impl RenderEngine {
    pub fn new() -> Self {
        Self {
            title: "Genie Snapshot".to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Render cleaned groups into the snapshot's entry document
    pub fn render(&self, groups: &[CleanGroup], config: &ExportConfig, exported_on: Date) -> String {
        let columns: String = groups
            .iter()
            .enumerate()
            .map(|(index, group)| render_group(index, group, config.grid_cols))
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{tailwind}"></script>
    <script type="module" src="{model_viewer}"></script>
    <style>
        :root {{ --neon-blue: {neon}; }}
        body {{
            background-color: #050505; color: #e5e7eb;
            font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace;
            overflow: hidden;
        }}
        .custom-scrollbar::-webkit-scrollbar {{ width: 8px; height: 8px; }}
        .custom-scrollbar::-webkit-scrollbar-track {{ background: #0a0a0a; }}
        .custom-scrollbar::-webkit-scrollbar-thumb {{ background: #333; border-radius: 4px; }}
        .custom-scrollbar::-webkit-scrollbar-thumb:hover {{ background: var(--neon-blue); }}
        .model-viewer-container {{ background: #000; width: 100%; height: 100%; }}
    </style>
</head>
<body class="h-screen w-screen flex flex-col">
    <header class="h-14 border-b border-[#1f2933] flex items-center px-4 justify-between bg-[#050505] shrink-0">
        <div class="flex items-center gap-2">
            {logo}
            <h1 class="text-xl font-bold tracking-wider text-white">
                VISUAL <span style="color: var(--neon-blue)">GENIE</span>
                <span class="text-[10px] uppercase tracking-widest text-gray-500 ml-3 border border-[#333] px-2 py-0.5 rounded">Snapshot</span>
            </h1>
        </div>
        <div class="text-xs text-gray-600 font-mono">{date}</div>
    </header>
    <div class="flex-1 flex overflow-hidden">
{columns}    </div>
</body>
</html>
"#,
            title = escape_html(&self.title),
            tailwind = TAILWIND_SCRIPT,
            model_viewer = MODEL_VIEWER_SCRIPT,
            neon = escape_html(&config.neon_color),
            logo = LOGO,
            date = exported_on,
            columns = columns,
        )
    }
}

impl Default for RenderEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn render_group(index: usize, group: &CleanGroup, grid_cols: u32) -> String {
    let cards = if group.files.is_empty() {
        format!(
            r#"                    <div class="col-span-full h-64 flex flex-col items-center justify-center text-gray-700 opacity-50"><p class="text-sm">{}</p></div>
"#,
            EMPTY_GROUP
        )
    } else {
        group.files.iter().map(render_card).collect()
    };

    format!(
        r#"        <div class="flex-1 flex flex-col min-w-[300px] border-r border-[#1f2933] bg-[#0a0a0a]" data-group="{id}">
            <div class="h-9 bg-[#111] flex items-center justify-between px-3 border-b border-[#333] shrink-0">
                <span class="text-xs text-gray-500 uppercase tracking-widest font-bold">Group {number}</span>
            </div>
            <div class="flex-1 overflow-y-auto p-4 bg-[#050505] grid gap-6 content-start pb-24 custom-scrollbar" style="grid-template-columns: repeat({cols}, minmax(0, 1fr)); grid-auto-rows: max-content;">
{cards}            </div>
        </div>
"#,
        id = group.id,
        number = index + 1,
        cols = grid_cols,
        cards = cards,
    )
}

fn render_card(file: &CleanFileRef) -> String {
    let name = escape_html(&file.name);
    let (icon, name_class, span) = if file.is_dir {
        (ICON_FOLDER, "text-orange-300 font-bold", "col-span-full")
    } else {
        (ICON_FILE, "text-gray-300", "col-span-1")
    };

    let kind = AssetKind::classify(&file.extension);
    let download = if !file.error && !file.is_dir && kind == AssetKind::Binary {
        format!(
            r#"<a href="{}" download="{}" class="text-gray-500 hover:text-white transition-colors" title="Download Asset">{}</a>"#,
            file.asset_path(),
            name,
            ICON_DOWNLOAD
        )
    } else {
        String::new()
    };

    let body = if file.error {
        format!(
            r#"<div class="flex flex-col items-center justify-center p-4 text-center opacity-50">{}<span class="text-[10px] text-red-400">{}</span></div>"#,
            ICON_ALERT, EXPORT_FAILED
        )
    } else {
        render_content(file, kind)
    };

    format!(
        r#"                    <div class="bg-[#0f1216] rounded-lg border border-[#1f2933] overflow-hidden flex flex-col relative shadow-lg h-auto w-full {span}">
                        <div class="flex justify-between items-center bg-[#1a2029] px-3 py-2 border-b border-[#1f2933]">
                            <div class="flex items-center gap-2 overflow-hidden flex-1 mr-2">{icon}<span class="text-xs font-mono truncate {name_class}" title="{name}">{name}</span></div>
                            {download}
                        </div>
                        <div class="relative bg-[#050505] h-auto min-h-[100px] flex justify-center">{body}</div>
                    </div>
"#,
    )
}

/// Per-extension presentation for a successfully fetched entry
fn render_content(file: &CleanFileRef, kind: AssetKind) -> String {
    if file.is_dir {
        return format!(
            r#"<div class="p-4 flex items-center gap-2 text-gray-500"><span class="text-xs">{}</span></div>"#,
            UNPROCESSED_DIRECTORY
        );
    }

    let path = file.asset_path();
    match kind {
        AssetKind::Image => format!(
            r#"<div class="bg-[#111] p-2 flex justify-center w-full"><img src="{}" alt="{}" class="max-h-96 object-contain" /></div>"#,
            path,
            escape_html(&file.name)
        ),
        AssetKind::Video => format!(
            r#"<div class="bg-black w-full"><video controls class="w-full max-h-96"><source src="{}" /></video></div>"#,
            path
        ),
        AssetKind::Mesh => format!(
            r#"<div class="w-full h-64 relative bg-gray-900"><model-viewer src="{}" camera-controls auto-rotate class="model-viewer-container"></model-viewer></div>"#,
            path
        ),
        AssetKind::Embed => format!(
            r#"<div class="text-xs bg-[#0d1117] w-full max-h-64 overflow-auto custom-scrollbar p-2"><iframe src="{}" class="w-full h-48 border-none bg-transparent" style="color-scheme: dark;"></iframe></div>"#,
            path
        ),
        AssetKind::Binary => format!(
            r#"<div class="p-4 flex items-center gap-4 bg-[#111] rounded w-full"><span class="text-gray-500 text-xs">{}</span></div>"#,
            BINARY_UNKNOWN
        ),
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::FileRef;
    use time::macros::date;

    fn clean(name: &str, safe: &str, error: bool) -> CleanFileRef {
        let file = FileRef::file(name, format!("/data/{}", name));
        if error {
            CleanFileRef::failed(&file, safe.to_string())
        } else {
            CleanFileRef::fetched(&file, safe.to_string())
        }
    }

    fn render(files: Vec<CleanFileRef>, grid_cols: u32) -> String {
        let groups = vec![CleanGroup { id: 7, files }];
        let config = ExportConfig::new(grid_cols, 180).unwrap();
        RenderEngine::new().render(&groups, &config, date!(2026 - 10 - 17))
    }

    #[test]
    fn test_each_kind_references_asset_once() {
        let files = vec![
            clean("a.png", "1_a.png", false),
            clean("b.mp4", "2_b.mp4", false),
            clean("c.glb", "3_c.glb", false),
            clean("d.py", "4_d.py", false),
            clean("e.zip", "5_e.zip", false),
        ];
        let html = render(files, 2);

        for safe in ["1_a.png", "2_b.mp4", "3_c.glb", "4_d.py", "5_e.zip"] {
            assert_eq!(html.matches(&format!("assets/{}", safe)).count(), 1, "{}", safe);
        }
        assert!(html.contains(r#"<img src="assets/1_a.png""#));
        assert!(html.contains(r#"<source src="assets/2_b.mp4" />"#));
        assert!(html.contains(r#"<model-viewer src="assets/3_c.glb""#));
        assert!(html.contains(r#"<iframe src="assets/4_d.py""#));
        assert!(html.contains(BINARY_UNKNOWN));
        assert!(html.contains(r#"href="assets/5_e.zip""#));
    }

    #[test]
    fn test_failed_file_has_no_reference() {
        let html = render(vec![clean("broken.png", "9_broken.png", true)], 1);
        assert!(html.contains(EXPORT_FAILED));
        assert!(!html.contains("9_broken.png"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_folder_renders_placeholder() {
        let mut folder = clean("stray", "1_stray", false);
        folder.is_dir = true;
        let html = render(vec![folder], 1);
        assert!(html.contains(UNPROCESSED_DIRECTORY));
        assert!(html.contains("col-span-full"));
        assert!(!html.contains("assets/1_stray"));
    }

    #[test]
    fn test_grid_columns_only_change_template() {
        let files = || vec![clean("a.png", "1_a.png", false), clean("b.txt", "2_b.txt", false)];
        let three = render(files(), 3);
        let one = render(files(), 1);

        assert!(three.contains("grid-template-columns: repeat(3, minmax(0, 1fr))"));
        assert_eq!(
            three.replace("repeat(3,", "repeat(1,"),
            one,
            "only the grid template should differ"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let files = || vec![clean("a.png", "1_a.png", false), clean("x.bin", "2_x.bin", true)];
        assert_eq!(render(files(), 2), render(files(), 2));
    }

    #[test]
    fn test_header_embeds_color_and_date() {
        let html = render(Vec::new(), 1);
        assert!(html.contains("--neon-blue: hsl(180, 100%, 50%);"));
        assert!(html.contains("2026-10-17"));
        assert!(html.contains(EMPTY_GROUP));
        assert!(html.contains("Group 1"));
    }

    #[test]
    fn test_custom_title() {
        let config = ExportConfig::new(1, 180).unwrap();
        let html = RenderEngine::new()
            .with_title("Moodboard & Refs")
            .render(&[], &config, date!(2026 - 10 - 17));
        assert!(html.contains("<title>Moodboard &amp; Refs</title>"));
    }

    #[test]
    fn test_names_are_escaped() {
        let html = render(vec![clean("<script>.txt", "1__script_.txt", false)], 1);
        assert!(html.contains("&lt;script&gt;.txt"));
        assert!(!html.contains("<script>.txt"));
    }
}
