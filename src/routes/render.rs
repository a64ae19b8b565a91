use crate::models::PageContext;

const ISLANDS: [&str; 3] = ["Biscoe", "Dream", "Torgersen"];
const SEXES: [(&str, &str); 2] = [("male", "Đực"), ("female", "Cái")];
const YEARS: [&str; 3] = ["2007", "2008", "2009"];

const STYLE: &str = "\
body { font-family: sans-serif; max-width: 640px; margin: 2rem auto; padding: 0 1rem; }
form { display: grid; grid-template-columns: 12rem 1fr; gap: 0.5rem 1rem; }
form button { grid-column: 2; justify-self: start; }
.result { color: #1b5e20; font-weight: bold; }
.error { color: #b71c1c; font-weight: bold; }
.history li { margin: 0.25rem 0; }
.history time { color: #666; font-size: 0.85em; margin-left: 0.5rem; }";

fn html_escape(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}

/// Render the index page
pub fn render_page(ctx: &PageContext) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"vi\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Dự đoán loài chim cánh cụt</title>\n");
    html.push_str(&format!("<style>\n{}\n</style>\n", STYLE));
    html.push_str("</head>\n<body>\n<h1>Dự đoán loài chim cánh cụt</h1>\n");

    render_form(&mut html);

    if let Some(text) = &ctx.prediction_text {
        html.push_str(&format!("<p class=\"result\">{}</p>\n", html_escape(text)));
    }
    if let Some(error) = &ctx.error {
        html.push_str(&format!("<p class=\"error\">{}</p>\n", html_escape(error)));
    }

    html.push_str("<h2>Lịch sử dự đoán</h2>\n");
    if ctx.history.is_empty() {
        html.push_str("<p class=\"history-empty\">Chưa có dự đoán nào.</p>\n");
    } else {
        html.push_str("<ol class=\"history\">\n");
        for record in &ctx.history {
            html.push_str(&format!(
                "<li>{}<time datetime=\"{}\">{}</time></li>\n",
                html_escape(&record.text),
                record.predicted_at.to_rfc3339(),
                record.predicted_at.format("%H:%M:%S UTC"),
            ));
        }
        html.push_str("</ol>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_form(html: &mut String) {
    html.push_str("<form action=\"/predict\" method=\"post\">\n");

    for (name, label) in [
        ("bill_length", "Chiều dài mỏ (mm)"),
        ("bill_depth", "Độ sâu mỏ (mm)"),
        ("flipper_length", "Chiều dài vây (mm)"),
        ("body_mass", "Khối lượng cơ thể (g)"),
    ] {
        html.push_str(&format!(
            "<label for=\"{name}\">{label}</label>\n<input type=\"text\" id=\"{name}\" name=\"{name}\" required>\n"
        ));
    }

    html.push_str(&format!(
        "<label for=\"island\">Đảo</label>\n<select id=\"island\" name=\"island\">{}</select>\n",
        options(ISLANDS.iter().map(|i| (*i, *i)))
    ));
    html.push_str(&format!(
        "<label for=\"sex\">Giới tính</label>\n<select id=\"sex\" name=\"sex\">{}</select>\n",
        options(SEXES.iter().copied())
    ));
    html.push_str(&format!(
        "<label for=\"year\">Năm</label>\n<select id=\"year\" name=\"year\">{}</select>\n",
        options(YEARS.iter().map(|y| (*y, *y)))
    ));

    html.push_str("<button type=\"submit\">Dự đoán</button>\n</form>\n");
}

fn options<'a>(values: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    values
        .map(|(value, text)| format!("<option value=\"{}\">{}</option>", value, text))
        .collect()
}
