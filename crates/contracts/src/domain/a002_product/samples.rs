//! Built-in sample catalog shown on the landing page while the API is offline

use super::aggregate::Product;

const SAMPLES: [(&str, &str, &str, &str); 8] = [
    (
        "R -2-Amino-2-(Cyclohexa-1,4-Dien-1-yl)Acetic Acid",
        "26774-88-9",
        "High purity chemical for research and industrial use.",
        "Industrial Chemicals",
    ),
    (
        "2-acetamido-2-deoxy-alpha-d- Glucopyranosylchloride-3,4,6- Triacetate",
        "-",
        "Speciality reagent used in glycosylation reactions.",
        "Laboratory Chemical",
    ),
    (
        "(4s)-4-(Aminomethyl)-1,3-Oxazolidin-2-One, 1hydrochloride Salt",
        "-",
        "Intermediate used in pharmaceutical synthesis.",
        "Pharmaceutical Ingredients",
    ),
    (
        "Anti-Human Igg (Gama-Chain Specific)-Fitc",
        "-",
        "Biological reagent for immunoassays.",
        "Speciality Chemicals",
    ),
    (
        "Dehydroisoandrosterone 3- Sulfate Sodium Salt Dihydrate",
        "-",
        "Steroid derivative for pharmaceutical applications.",
        "Industrial Chemicals",
    ),
    (
        "N-2-acetamido Phenethyl-1- Hydroxy-2-naphthamide",
        "-",
        "Chemical compound for research purposes.",
        "Industrial Chemicals",
    ),
    (
        "3-acetamido-5-boronic Benzoic Acid",
        "-",
        "Boronic acid derivative for synthesis.",
        "Industrial Chemicals",
    ),
    (
        "2-acetamido-5- Fluorobenzoic Acid",
        "-",
        "Fluorinated benzoic acid derivative.",
        "Industrial Chemicals",
    ),
];

pub fn sample_catalog() -> Vec<Product> {
    SAMPLES
        .iter()
        .enumerate()
        .map(|(i, (title, cas, description, category))| {
            let id = i as i64 + 1;
            Product {
                id,
                title: title.to_string(),
                cas_number: Some(cas.to_string()),
                image_url: format!("https://via.placeholder.com/400x300?text=Product+{id}"),
                description: description.to_string(),
                category: Some(category.to_string()),
                category_entity: None,
                slug: None,
                anchor: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids_are_sequential() {
        let samples = sample_catalog();
        assert_eq!(samples.len(), 8);
        assert!(samples.iter().enumerate().all(|(i, p)| p.id == i as i64 + 1));
        assert!(samples[0].image_url.ends_with("Product+1"));
    }
}
