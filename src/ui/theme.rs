//! Shared class strings so every screen looks the same.

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary() -> &'static str {
    "rounded-lg bg-emerald-500 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-400 disabled:cursor-not-allowed disabled:opacity-50"
}

pub fn btn_secondary() -> &'static str {
    "rounded-lg border border-slate-600 px-4 py-2 text-sm font-semibold text-slate-200 hover:bg-slate-800"
}

pub fn btn_danger() -> &'static str {
    "rounded-lg border border-rose-500/40 px-4 py-2 text-sm font-semibold text-rose-200 hover:bg-rose-500/10 disabled:opacity-40"
}

pub fn btn_small(active: bool) -> &'static str {
    if active {
        "rounded px-2 py-1 text-xs font-semibold bg-emerald-500/20 text-emerald-300 border border-emerald-500/40"
    } else {
        "rounded px-2 py-1 text-xs text-slate-500 border border-slate-700 hover:border-emerald-600 hover:text-emerald-300"
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class() -> &'static str {
    "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none"
}

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

// ============================================
// PANEL / TABLE STYLES
// ============================================

pub fn panel() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40"
}

pub fn panel_highlight() -> &'static str {
    "rounded-xl border border-emerald-700/50 bg-emerald-950/20"
}

pub fn section_title() -> &'static str {
    "text-sm font-semibold uppercase tracking-wide text-slate-500"
}

pub fn table_container() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40 overflow-hidden"
}

pub fn table_header() -> &'static str {
    "border-b border-slate-800 bg-slate-900/60 text-xs uppercase text-slate-500"
}

pub fn table_divider() -> &'static str {
    "divide-y divide-slate-800"
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_muted() -> &'static str {
    "text-slate-500"
}

pub fn accent_text() -> &'static str {
    "text-emerald-400"
}

pub fn link_class() -> &'static str {
    "text-xs font-semibold uppercase tracking-wide text-emerald-300 hover:text-emerald-100"
}
