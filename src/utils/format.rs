use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// "R$ 149.00"
pub fn format_brl(valor: f64) -> String {
    format!("R$ {:.2}", valor)
}

/// Valor de inscripción: "Gratuito" cuando no se cobra
pub fn format_entry_fee(valor: f64) -> String {
    if valor > 0.0 {
        format_brl(valor)
    } else {
        "Gratuito".to_string()
    }
}

/// Fecha en formato dd/mm/aaaa. Si no se puede interpretar, devuelve el texto original.
pub fn format_date_br(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Convierte la fecha de un `<input type="date">` en el timestamp ISO que espera la API
pub fn date_input_to_iso(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .ok()
        .map(|d| format!("{}T00:00:00.000Z", d.format("%Y-%m-%d")))
}

/// Primer nombre, o "Combatente" si no hay
pub fn first_name(nome: &str) -> String {
    nome.split_whitespace()
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| "Combatente".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(format_brl(149.0), "R$ 149.00");
        assert_eq!(format_brl(0.5), "R$ 0.50");
        assert_eq!(format_entry_fee(0.0), "Gratuito");
        assert_eq!(format_entry_fee(80.0), "R$ 80.00");
    }

    #[test]
    fn dates_accept_api_shapes() {
        assert_eq!(format_date_br("2024-03-05T10:20:30.123456"), "05/03/2024");
        assert_eq!(format_date_br("2024-03-05T10:20:30Z"), "05/03/2024");
        assert_eq!(format_date_br("2024-03-05T10:20"), "05/03/2024");
        assert_eq!(format_date_br("2024-03-05"), "05/03/2024");
        assert_eq!(format_date_br("ontem"), "ontem");
    }

    #[test]
    fn date_input_becomes_midnight_utc() {
        assert_eq!(
            date_input_to_iso("2025-02-10").as_deref(),
            Some("2025-02-10T00:00:00.000Z")
        );
        assert_eq!(date_input_to_iso(""), None);
    }

    #[test]
    fn first_name_falls_back() {
        assert_eq!(first_name("Ana Paula Souza"), "Ana");
        assert_eq!(first_name("   "), "Combatente");
    }
}
