use crate::annotate::model::{
    Annotation, EntityMention, SentenceSpan, TokenSpan, CONTENTFUL_ENTITY_TYPES,
    CONTENTFUL_POS_TAGS,
};
use crate::annotate::Annotator;
use crate::errors::AnnotateError;
use reqwest::blocking::Client;
use serde::Deserialize;

/// Raw annotated-data-model payload as returned by the service with
/// `output=rosette`.
#[derive(Debug, Default, Deserialize)]
struct AdmResponse {
    #[serde(default)]
    data: String,
    #[serde(default)]
    attributes: AdmAttributes,
}

#[derive(Debug, Default, Deserialize)]
struct AdmAttributes {
    #[serde(default)]
    sentence: AdmItems<AdmSpan>,
    #[serde(default)]
    token: AdmItems<AdmToken>,
    #[serde(default)]
    entities: AdmItems<AdmEntity>,
}

#[derive(Debug, Deserialize)]
struct AdmItems<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

impl<T> Default for AdmItems<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdmSpan {
    start_offset: usize,
    end_offset: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdmToken {
    start_offset: usize,
    end_offset: usize,
    #[serde(default)]
    text: String,
    #[serde(default)]
    analyses: Vec<AdmAnalysis>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdmAnalysis {
    lemma: Option<String>,
    part_of_speech: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdmEntity {
    entity_id: Option<String>,
    #[serde(rename = "type")]
    entity_type: Option<String>,
    #[serde(default = "Vec::new")]
    mentions: Vec<AdmMention>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdmMention {
    start_offset: usize,
    end_offset: usize,
    normalized: Option<String>,
}

/// Client for a text-analytics REST API that emits annotated-data-model
/// results. Entities and lemmas come from two separate endpoints and are
/// merged into one [`Annotation`].
pub struct HttpAnnotator {
    api_url: String,
    key: String,
    language: Option<String>,
    client: Client,
}

impl HttpAnnotator {
    pub fn new(api_url: String, key: String, language: Option<String>) -> Self {
        Self {
            api_url,
            key,
            language,
            client: Client::new(),
        }
    }

    fn post_adm(&self, endpoint: &str, content: &str, uri: bool) -> Result<AdmResponse, AnnotateError> {
        let url = format!(
            "{}/{}?output=rosette",
            self.api_url.trim_end_matches('/'),
            endpoint
        );
        let mut body = serde_json::Map::new();
        let field = if uri { "contentUri" } else { "content" };
        body.insert(field.into(), content.into());
        if let Some(lang) = &self.language {
            body.insert("language".into(), lang.as_str().into());
        }

        // Simple retry with backoff
        let mut last_err: Option<String> = None;
        for attempt in 0..3 {
            match self
                .client
                .post(&url)
                .header("X-RosetteAPI-Key", self.key.as_str())
                .json(&body)
                .send()
            {
                Ok(resp) => {
                    if resp.status().is_success() {
                        return resp
                            .json::<AdmResponse>()
                            .map_err(|e| AnnotateError::Decode(format!("decode {endpoint}: {e}")));
                    }
                    last_err = Some(format!("status {} from {}", resp.status(), url));
                }
                Err(e) => {
                    last_err = Some(format!("connect {}: {}", url, e));
                }
            }
            std::thread::sleep(std::time::Duration::from_millis(100 * (attempt + 1)));
        }
        Err(AnnotateError::Http(
            last_err.unwrap_or_else(|| "annotation request failed".into()),
        ))
    }
}

impl Annotator for HttpAnnotator {
    fn annotate(&self, content: &str, uri: bool) -> Result<Annotation, AnnotateError> {
        let entities = self.post_adm("entities", content, uri)?;
        let morphology = self.post_adm("morphology/lemmas", content, uri)?;
        Ok(flatten(entities, morphology))
    }
}

/// Combine the entities and morphology responses into one flat [`Annotation`].
///
/// Document text and sentence/entity annotations come from the entities
/// response; token items come from the morphology response, which carries the
/// lemma analyses. A token's lemma is its first analysis, falling back to the
/// surface form.
fn flatten(entities: AdmResponse, morphology: AdmResponse) -> Annotation {
    let sentences = entities
        .attributes
        .sentence
        .items
        .iter()
        .map(|s| SentenceSpan {
            start: s.start_offset,
            end: s.end_offset,
        })
        .collect();

    let tokens = morphology
        .attributes
        .token
        .items
        .into_iter()
        .map(|t| {
            let analysis = t.analyses.first();
            let lemma = analysis
                .and_then(|a| a.lemma.clone())
                .unwrap_or_else(|| t.text.clone());
            let contentful = analysis
                .and_then(|a| a.part_of_speech.as_deref())
                .map(|pos| CONTENTFUL_POS_TAGS.contains(pos))
                .unwrap_or(false);
            TokenSpan {
                start: t.start_offset,
                end: t.end_offset,
                lemma,
                contentful,
            }
        })
        .collect();

    let mut mentions = Vec::new();
    for entity in entities.attributes.entities.items {
        let contentful = entity
            .entity_type
            .as_deref()
            .map(|t| CONTENTFUL_ENTITY_TYPES.contains(t))
            .unwrap_or(false);
        if !contentful {
            continue;
        }
        for mention in entity.mentions {
            // Coreferent mentions share the entity id; fall back to the
            // normalized surface form for unlinked entities.
            let key = entity
                .entity_id
                .clone()
                .or_else(|| mention.normalized.clone());
            if let Some(key) = key {
                mentions.push(EntityMention {
                    start: mention.start_offset,
                    end: mention.end_offset,
                    key,
                });
            }
        }
    }

    Annotation {
        data: entities.data,
        sentences,
        tokens,
        mentions,
    }
}
