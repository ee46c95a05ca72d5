//! Dashboard Overview page

struct MetricCard {
    title: &'static str,
    body: &'static str,
}

const CARDS: [MetricCard; 4] = [
    MetricCard {
        title: "🧬 Species",
        body: "<i>Schistosoma haematobium</i> is the main cause of urinary schistosomiasis in humans.",
    },
    MetricCard {
        title: "🚻 Main Symptom",
        body: "Blood in urine (haematuria) is the classic sign of infection, especially in children.",
    },
    MetricCard {
        title: "🏞️ Habitat",
        body: "Larvae are released by freshwater snails and infect people during water contact.",
    },
    MetricCard {
        title: "⚠️ Complications",
        body: "Chronic infection can cause bladder damage, kidney failure.",
    },
];

pub(super) fn render() -> String {
    let mut html = String::from("<h2>Schistosoma haematobium</h2>\n");
    html.push_str("<div class=\"columns columns-4\">\n");
    for card in &CARDS {
        html.push_str(&format!(
            "<div class=\"metric-card\">\n<h3>{}</h3>\n<p>{}</p>\n</div>\n",
            card.title, card.body
        ));
    }
    html.push_str("</div>\n<br>\n");
    html
}
