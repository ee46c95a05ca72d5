//! About Schistosomiasis page

use super::{Tone, callout};

const TRANSMISSION_OVERVIEW: &str = "Schistosomiasis is transmitted when people come into contact with freshwater contaminated \
by the parasite. The life cycle involves freshwater snails that release tiny larvae \
(cercariae) into the water. These larvae can penetrate human skin during activities \
like swimming, bathing, fishing, or farming. Once inside the body, they develop into \
adult worms that live in blood vessels and produce eggs, which cause disease.";

const DEFINITION: &str = "Schistosomiasis, also known as bilharzia, is a disease caused by parasitic flatworms called schistosomes. \
<i>Schistosoma haematobium</i> is one of the main species that causes urogenital schistosomiasis, \
primarily affecting the bladder and urinary tract, which can lead to serious long-term health problems if left untreated.";

const TRANSMISSION: &str = "Infection occurs when skin comes into contact with contaminated freshwater where certain types of snails that carry the parasites live. The parasite larvae penetrate the skin and develop into adult worms inside the body.";

const SYMPTOMS: &[&str] = &[
    "<b>Blood in urine (haematuria)</b> - The most common sign.",
    "Painful or frequent urination.",
    "Lower abdominal pain.",
    "In women: Genital sores, vaginal bleeding, and pain during intercourse.",
    "In men: Pathology of the seminal vesicles and prostate.",
];

const PREVENTION: &[&str] = &[
    "<b>Avoid wading, swimming, or bathing</b> in freshwater in endemic areas.",
    "Use safe water from boreholes or taps.",
    "Improve sanitation to prevent human waste from contaminating water.",
];

fn bullets(items: &[&str]) -> String {
    let mut html = String::from("<ul>\n");
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", item));
    }
    html.push_str("</ul>\n");
    html
}

pub(super) fn render() -> String {
    let mut html = String::from("<h2>🔬 About Schistosomiasis (Bilharzia)</h2>\n");

    html.push_str("<div class=\"columns columns-2\">\n");
    html.push_str(&format!(
        "<div>\n<h3>How is Schistosomiasis Transmitted?</h3>\n<p>{}</p>\n</div>\n",
        TRANSMISSION_OVERVIEW
    ));
    html.push_str(&format!(
        "<div>\n<h3>What is Schistosomiasis?</h3>\n<p>{}</p>\n</div>\n",
        DEFINITION
    ));
    html.push_str("</div>\n<hr>\n");

    html.push_str("<div class=\"columns columns-3\">\n");
    html.push_str("<div>\n");
    html.push_str(&callout(Tone::Info, "<h4>💧 Transmission</h4>"));
    html.push_str(&format!("<p>{}</p>\n", TRANSMISSION));
    html.push_str("</div>\n<div>\n");
    html.push_str(&callout(Tone::Warning, "<h4>🩺 Symptoms</h4>"));
    html.push_str(&bullets(SYMPTOMS));
    html.push_str("</div>\n<div>\n");
    html.push_str(&callout(Tone::Success, "<h4>🛡️ Prevention &amp; Treatment</h4>"));
    html.push_str(&bullets(PREVENTION));
    html.push_str("</div>\n</div>\n");
    html
}
