use leptos::prelude::*;

/// Outline glyphs (24x24 viewBox, stroke only) as path data
fn paths(name: &str) -> &'static [&'static str] {
    match name {
        "dashboard" => &["M3 3h7v9H3z", "M14 3h7v5h-7z", "M14 12h7v9h-7z", "M3 16h7v5H3z"],
        "truck" => &[
            "M1 3h15v13H1z",
            "M16 8h4l3 3v5h-7V8z",
            "M5.5 18.5a2.5 2.5 0 1 0 0 .01",
            "M18.5 18.5a2.5 2.5 0 1 0 0 .01",
        ],
        "route" => &["M6 19a2 2 0 1 0 0 .01", "M18 5a2 2 0 1 0 0 .01", "M8 19h8.5a3.5 3.5 0 0 0 0-7h-9a3.5 3.5 0 0 1 0-7H16"],
        "id-card" => &["M3 5h18v14H3z", "M9 10a2 2 0 1 0 0 .01", "M6 16c.6-1.5 1.8-2 3-2s2.4.5 3 2", "M15 10h3", "M15 14h3"],
        "users" => &[
            "M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2",
            "M9 7a4 4 0 1 0 0 .01",
            "M23 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        "user" => &["M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2", "M12 7a4 4 0 1 0 0 .01"],
        "wrench" => &["M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"],
        "tire" => &["M12 12m-10 0a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "M12 12m-4 0a4 4 0 1 0 8 0a4 4 0 1 0-8 0"],
        "fuel" => &["M3 22h12", "M4 9h10", "M14 22V4a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v18", "M14 13h2a2 2 0 0 1 2 2v2a2 2 0 0 0 4 0V9.83a2 2 0 0 0-.59-1.42L18 5"],
        "wallet" => &["M20 12V8H6a2 2 0 0 1 0-4h12v4", "M4 6v12a2 2 0 0 0 2 2h14v-4", "M18 12a2 2 0 0 0 0 4h4v-4z"],
        "cash" => &["M2 6h20v12H2z", "M12 12m-2 0a2 2 0 1 0 4 0a2 2 0 1 0-4 0", "M6 12h.01", "M18 12h.01"],
        "receipt" => &["M4 2v20l2-1 2 1 2-1 2 1 2-1 2 1 2-1 2 1V2l-2 1-2-1-2 1-2-1-2 1-2-1-2 1z", "M16 8H8", "M16 12H8", "M13 16H8"],
        "calendar" => &["M3 4h18v18H3z", "M16 2v4", "M8 2v4", "M3 10h18"],
        "settings" => &["M12 12m-3 0a3 3 0 1 0 6 0a3 3 0 1 0-6 0", "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-2.82 1.17V21a2 2 0 0 1-4 0v-.09a1.65 1.65 0 0 0-2.82-1.17l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 3 15.4H3a2 2 0 0 1 0-4h.09a1.65 1.65 0 0 0 1.17-2.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.6V3a2 2 0 0 1 4 0v.09a1.65 1.65 0 0 0 2.82 1.17l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 20.4 9H21a2 2 0 0 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z"],
        "plus" => &["M12 5v14", "M5 12h14"],
        "refresh" => &["M23 4v6h-6", "M1 20v-6h6", "M3.51 9a9 9 0 0 1 14.85-3.36L23 10", "M20.49 15a9 9 0 0 1-14.85 3.36L1 14"],
        "download" => &["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "M7 10l5 5 5-5", "M12 15V3"],
        "file-text" => &["M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z", "M14 2v6h6", "M16 13H8", "M16 17H8"],
        "edit" => &["M12 20h9", "M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"],
        "delete" => &["M3 6h18", "M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6", "M10 11v6", "M14 11v6", "M9 6V4h6v2"],
        "search" => &["M11 11m-8 0a8 8 0 1 0 16 0a8 8 0 1 0-16 0", "M21 21l-4.35-4.35"],
        "filter" => &["M22 3H2l8 9.46V19l4 2v-8.54z"],
        "x" => &["M18 6L6 18", "M6 6l12 12"],
        "chevron-left" => &["M15 18l-6-6 6-6"],
        "chevron-right" => &["M9 18l6-6-6-6"],
        "chevron-down" => &["M6 9l6 6 6-6"],
        "chevrons-left" => &["M11 17l-5-5 5-5", "M18 17l-5-5 5-5"],
        "chevrons-right" => &["M13 17l5-5-5-5", "M6 17l5-5-5-5"],
        "panel-left-close" => &["M3 3h18v18H3z", "M9 3v18", "M16 15l-3-3 3-3"],
        "panel-left-open" => &["M3 3h18v18H3z", "M9 3v18", "M14 9l3 3-3 3"],
        "log-out" => &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "M16 17l5-5-5-5", "M21 12H9"],
        "image" => &["M3 3h18v18H3z", "M8.5 8.5m-1.5 0a1.5 1.5 0 1 0 3 0a1.5 1.5 0 1 0-3 0", "M21 15l-5-5L5 21"],
        _ => &["M12 12m-10 0a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "M12 8v4l3 3"],
    }
}

pub fn icon(name: &str) -> AnyView {
    let size = match name {
        "chevron-left" | "chevron-right" | "chevron-down" | "chevrons-left" | "chevrons-right"
        | "x" => "16",
        _ => "18",
    };
    view! {
        <svg width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths(name).iter().map(|d| view! { <path d=*d/> }).collect_view()}
        </svg>
    }
    .into_any()
}
