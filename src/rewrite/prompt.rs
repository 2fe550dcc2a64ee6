//! Prompt construction for the writing-tutor persona.

use super::catalog::{Context, ToneVariant};

/// Builds the instruction sent to the model for one rewrite request.
///
/// The user's text is embedded literally, surrounded by quotes only; no
/// escaping or grammar validation is applied. The prompt pins the model to a
/// strict output grammar (a `리라이팅:` line followed by a `설명` block) that
/// the reply parser recognises.
#[must_use]
pub fn build_rewrite_prompt(text: &str, context: Context, tone: &ToneVariant) -> String {
    format!(
        "\
당신은 전문 영어 글쓰기 튜터입니다. 다음 영어 문장을 {context} 상황에 맞는 {tone} 스타일로 리라이팅해주세요.

원문: \"{text}\"
상황: {context}
요청 톤: {tone} ({description})

아래 형식을 정확히 지켜서 답변해주세요. 다른 말은 추가하지 마세요:

리라이팅: [개선된 문장을 여기에 작성]
설명
[구체적인 변경 사항과 이유를 여기에 작성]

원문의 어떤 부분을 왜 바꿨는지 구체적으로 설명해주세요.
",
        context = context.label(),
        tone = tone.name(),
        description = tone.description(),
    )
}

#[cfg(test)]
mod tests {
    use crate::rewrite::{Context, ToneCatalog};

    use super::build_rewrite_prompt;

    #[test]
    fn prompt_embeds_the_original_text_verbatim_in_quotes() {
        let catalog = ToneCatalog::standard();
        let tone = catalog.default_tone(Context::BusinessEmail);

        let prompt = build_rewrite_prompt("Send me the file \"now\".", Context::BusinessEmail, tone);

        assert!(
            prompt.contains("원문: \"Send me the file \"now\".\""),
            "user text must appear unescaped inside quotes, got:\n{prompt}"
        );
    }

    #[test]
    fn prompt_names_context_tone_and_description() {
        let catalog = ToneCatalog::standard();
        let tone = catalog
            .resolve(Context::Academic, Some("분석적"))
            .expect("tone should resolve");

        let prompt = build_rewrite_prompt("This proves it.", Context::Academic, tone);

        assert!(prompt.contains("academic 상황에 맞는 분석적 스타일"));
        assert!(prompt.contains("요청 톤: 분석적 (데이터와 근거를 중시하는 분석적이고 논리적인 톤)"));
    }

    #[test]
    fn prompt_pins_the_output_grammar_markers() {
        let catalog = ToneCatalog::standard();
        let tone = catalog.default_tone(Context::Casual);

        let prompt = build_rewrite_prompt("Hello.", Context::Casual, tone);

        assert!(prompt.contains("리라이팅: [개선된 문장을 여기에 작성]"));
        assert!(prompt.contains("설명\n[구체적인 변경 사항과 이유를 여기에 작성]"));
    }
}
