// src/utils/format.rs
//! Funções de formatação para exibição

/// Formata número genérico com sufixo K/M
pub fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1e6)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1e3)
    } else {
        n.to_string()
    }
}

/// Formata duração em segundos para formato legível
pub fn format_duration(secs: u64) -> String {
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;

    if h > 0 {
        format!("{}h{}m{}s", h, m, s)
    } else if m > 0 {
        format!("{}m{}s", m, s)
    } else {
        format!("{}s", s)
    }
}

/// Formata itens por segundo (`unit` = "doc", "tok", ...)
pub fn format_throughput(per_sec: f64, unit: &str) -> String {
    if per_sec >= 1_000_000.0 {
        format!("{:.2}M {}/s", per_sec / 1e6, unit)
    } else if per_sec >= 1_000.0 {
        format!("{:.1}K {}/s", per_sec / 1e3, unit)
    } else {
        format!("{:.1} {}/s", per_sec, unit)
    }
}

/// Percentual de `part` em `total`
pub fn format_percent(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 * 100.0 / total as f64)
}
