//! The grading instruction and the response schema sent with it.

use serde_json::{Value, json};

use redacao_core::rubric::{Competency, MAX_COMPETENCY_SCORE, MAX_FINAL_SCORE};

pub const FINAL_SCORE_FIELD: &str = "nota_final";
pub const FEEDBACK_FIELD: &str = "feedback_detalhado";

/// Every field the model must return, in the order it is asked for.
pub fn required_fields() -> Vec<&'static str> {
    let mut fields = vec![FINAL_SCORE_FIELD];
    fields.extend(Competency::ALL.iter().map(|c| c.field()));
    fields.push(FEEDBACK_FIELD);
    fields
}

/// Build the grading instruction for one essay.
///
/// The essay is embedded verbatim between triple quotes.
pub fn build_scoring_prompt(essay: &str) -> String {
    let competencies = Competency::ALL.len();
    let mut prompt = format!(
        "Você é um corretor de redações expert no modelo ENEM, atribuindo notas de 0 a \
         {MAX_COMPETENCY_SCORE} para cada uma das {competencies} competências.\n\
         Analise o texto a seguir e gere uma resposta estritamente no formato JSON.\n\
         \n\
         Texto da Redação:\n\
         \"\"\"{essay}\"\"\"\n\
         \n\
         O JSON DEVE CONTER:\n\
         1. {FINAL_SCORE_FIELD} (soma das {competencies} competências, 0 a {MAX_FINAL_SCORE})\n"
    );

    for (i, competency) in Competency::ALL.iter().enumerate() {
        prompt.push_str(&format!(
            "{}. {} (nota da Competência {}: {})\n",
            i + 2,
            competency.field(),
            competency.number(),
            competency.description(),
        ));
    }

    prompt.push_str(&format!(
        "{}. {FEEDBACK_FIELD} (uma análise completa e construtiva, focando nos pontos fracos e \
         fortes de cada competência, usando quebras de linha \\n).\n",
        competencies + 2,
    ));

    prompt
}

/// Response schema: six integer scores and a string feedback, all required.
pub fn scoring_schema() -> Value {
    let mut properties = serde_json::Map::new();
    properties.insert(FINAL_SCORE_FIELD.to_string(), json!({ "type": "INTEGER" }));
    for competency in Competency::ALL {
        properties.insert(competency.field().to_string(), json!({ "type": "INTEGER" }));
    }
    properties.insert(FEEDBACK_FIELD.to_string(), json!({ "type": "STRING" }));

    let fields = required_fields();
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": fields,
        "propertyOrdering": fields,
    })
}
