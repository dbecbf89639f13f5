use crate::lexicon::{CAUSAL_CONNECTORS, CAUSE_MARKERS, CONCLUSION_CUES, EFFECT_MARKERS, TRANSITIONS};
use crate::scoring::clamp01;
use crate::text::{contains_any, Sentence, TextFeatures};

const TRANSITION_WEIGHT: f64 = 0.25;
const CONTINUITY_WEIGHT: f64 = 0.30;
const FLOW_WEIGHT: f64 = 0.25;
const STRUCTURE_CAP: f64 = 0.20;

const HOOK_MAX_CHARS: usize = 100;
const CONTINUITY_WINDOW: usize = 4;

/// Raw accumulators from the sentence-pair scan, before normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoherenceSignals {
    pub transitions: usize,
    pub continuity: f64,
    pub logical_flow: f64,
    pub structure: f64,
}

impl CoherenceSignals {
    pub fn collect(features: &TextFeatures) -> Self {
        let mut signals = CoherenceSignals::default();
        let sentences = &features.sentences;

        if features.paragraphs > 1 {
            signals.structure += 0.2;
        }

        for pair in sentences.windows(2) {
            let previous = pair[0].text.to_lowercase();
            let current = pair[1].text.to_lowercase();

            if contains_any(&current, TRANSITIONS) {
                signals.transitions += 1;
                signals.logical_flow += 0.1;
            }

            if shares_edge_word(&previous, &current) {
                signals.continuity += 0.15;
            }

            if pair[0].is_question() && contains_any(&current, CAUSAL_CONNECTORS) {
                signals.logical_flow += 0.2;
            }

            if contains_any(&previous, CAUSE_MARKERS) && contains_any(&current, EFFECT_MARKERS) {
                signals.logical_flow += 0.15;
            }
        }

        if let Some(first) = sentences.first() {
            if is_hook(first) {
                signals.structure += 0.1;
            }
        }
        if let Some(last) = sentences.last() {
            if contains_any(&last.text.to_lowercase(), CONCLUSION_CUES) {
                signals.structure += 0.1;
            }
        }

        signals
    }

    pub fn score(&self, sentence_count: usize) -> f64 {
        if sentence_count == 0 {
            return 0.0;
        }
        let n = sentence_count as f64;
        let transition = (self.transitions as f64 / n).min(1.0) * TRANSITION_WEIGHT;
        let continuity = (self.continuity / n).min(1.0) * CONTINUITY_WEIGHT;
        let flow = (self.logical_flow / n).min(1.0) * FLOW_WEIGHT;
        let structure = self.structure.min(STRUCTURE_CAP);
        clamp01(transition + continuity + flow + structure)
    }
}

pub fn coherence(features: &TextFeatures) -> f64 {
    if features.is_blank() {
        return 0.0;
    }
    if features.sentence_count() < 2 {
        return 0.5;
    }
    CoherenceSignals::collect(features).score(features.sentence_count())
}

/// A long word among the last few of one sentence reappears among the first few of the next.
fn shares_edge_word(previous: &str, current: &str) -> bool {
    let previous_words: Vec<&str> = previous.split_whitespace().collect();
    let tail = &previous_words[previous_words.len().saturating_sub(CONTINUITY_WINDOW)..];
    let head: Vec<&str> = current.split_whitespace().take(CONTINUITY_WINDOW).collect();
    tail.iter()
        .any(|word| word.chars().count() > 3 && head.contains(word))
}

fn is_hook(sentence: &Sentence) -> bool {
    sentence.text.chars().count() < HOOK_MAX_CHARS
        && (sentence.is_question() || sentence.is_exclamation())
}
