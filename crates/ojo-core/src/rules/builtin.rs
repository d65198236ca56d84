//! Built-in rule tables.
//!
//! Catalog order is priority order: within a catalog the first matching rule wins.

use regex::Regex;

use super::condition::{
    pos_base_form, pos_only, pos_surface, surface_only, surface_sequence, Condition, ConditionSet,
};
use super::pos::*;
use super::{
    ContinuousRule, ExcludeRule, MeaningClass, RegistryError, SentenceEndingRule, SingleTokenRule,
};

fn rule(path: FeaturePath, surface: &'static str, replacement: &'static str) -> SingleTokenRule {
    SingleTokenRule::new(pos_surface(path, surface), replacement)
}

fn pronoun(surface: &'static str, replacement: &'static str) -> SingleTokenRule {
    rule(PRONOUN_GENERAL, surface, replacement)
}

fn adnominal(surface: &'static str, replacement: &'static str) -> SingleTokenRule {
    rule(ADNOMINAL, surface, replacement)
}

fn adjective(surface: &'static str, replacement: &'static str) -> SingleTokenRule {
    rule(ADJECTIVE_INDEPENDENT, surface, replacement)
}

fn interjection(surface: &'static str, replacement: &'static str) -> SingleTokenRule {
    rule(INTERJECTION, surface, replacement)
}

/// Copula-like endings that take the polite suffix and may stretch or exclaim.
fn polite_ending(path: FeaturePath, surface: &'static str, replacement: &'static str) -> SingleTokenRule {
    rule(path, surface, replacement).long_note().kuten()
}

pub(super) fn single_rules() -> Vec<SingleTokenRule> {
    let not_before_particle = pos_only(PARTICLE_ADVERBIAL_PARALLEL_ENDING);
    let after_verb = pos_only(VERB_INDEPENDENT);
    let honorific_suffix = surface_only("上");

    vec![
        // first person
        pronoun("俺", "私"),
        pronoun("オレ", "ワタクシ"),
        pronoun("おれ", "わたくし"),
        pronoun("僕", "私"),
        pronoun("ボク", "ワタクシ"),
        pronoun("ぼく", "わたくし"),
        pronoun("あたし", "わたくし"),
        pronoun("わたし", "わたくし"),
        // second person
        pronoun("あなた", "貴方"),
        pronoun("あんた", "貴方"),
        pronoun("おまえ", "貴方"),
        pronoun("お前", "貴方"),
        pronoun("てめぇ", "貴方"),
        pronoun("てめえ", "貴方"),
        rule(NOUN_GENERAL, "貴様", "貴方").no_prefix(),
        pronoun("君", "貴方"),
        // third person
        rule(NOUN_GENERAL, "パパ", "パパ上").after_ignore(honorific_suffix.clone()),
        rule(NOUN_GENERAL, "ママ", "ママ上").after_ignore(honorific_suffix),
        pronoun("皆", "皆様方"),
        rule(NOUN_GENERAL, "皆様", "皆様方").no_prefix(),
        // demonstratives
        pronoun("これ", "こちら"),
        pronoun("それ", "そちら"),
        pronoun("あれ", "あちら"),
        pronoun("どれ", "どちら"),
        adnominal("この", "こちらの"),
        adnominal("その", "そちらの"),
        adnominal("あの", "あちらの"),
        adnominal("どの", "どちらの"),
        pronoun("ここ", "こちら"),
        pronoun("そこ", "そちら"),
        pronoun("あそこ", "あちら"),
        pronoun("どこ", "どちら"),
        adnominal("こんな", "このような"),
        adnominal("そんな", "そのような"),
        adnominal("あんな", "あのような"),
        adnominal("どんな", "どのような"),
        rule(NOUN_DEPENDENT_GENERAL, "もん", "もの"),
        // copula and verbs
        polite_ending(AUXILIARY_VERB, "です", "ですわ").after_ignore(not_before_particle.clone()),
        polite_ending(AUXILIARY_VERB, "だ", "ですわ").after_ignore(not_before_particle),
        polite_ending(VERB_INDEPENDENT, "する", "いたしますわ").sentence_end_only(),
        polite_ending(VERB_INDEPENDENT, "なる", "なりますわ").sentence_end_only(),
        rule(VERB_INDEPENDENT, "ある", "あります"),
        // particles
        rule(PARTICLE_ADVERBIAL, "じゃ", "では"),
        rule(PARTICLE_ADVERBIAL_PARALLEL_ENDING, "か", "の"),
        polite_ending(PARTICLE_SENTENCE_ENDING, "わ", "ですわ"),
        rule(PARTICLE_SENTENCE_ENDING, "な", "ね"),
        rule(PARTICLE_SENTENCE_ENDING, "さ", ""),
        rule(PARTICLE_CONJUNCTIVE, "から", "ので"),
        rule(PARTICLE_CONJUNCTIVE, "けど", "けれど"),
        rule(PARTICLE_CONJUNCTIVE, "し", "ですし"),
        // auxiliaries
        rule(AUXILIARY_VERB, "まし", "おりまし").before_ignore(after_verb.clone()),
        polite_ending(AUXILIARY_VERB, "ます", "ますわ"),
        polite_ending(AUXILIARY_VERB, "た", "たわ").sentence_end_only(),
        rule(AUXILIARY_VERB, "だろ", "でしょう"),
        rule(AUXILIARY_VERB, "ない", "ありません").before_ignore(after_verb),
        rule(VERB_DEPENDENT, "ください", "くださいまし").kuten(),
        rule(VERB_DEPENDENT, "くれ", "くださいまし").kuten(),
        // interjections
        interjection("ありがとう", "ありがとうございますわ"),
        interjection("じゃぁ", "それでは"),
        interjection("じゃあ", "それでは"),
        rule(VERB_DEPENDENT, "くれる", "くれます"),
        // vulgar adjectives
        adjective("汚い", "きったねぇ"),
        adjective("きたない", "きったねぇ"),
        adjective("臭い", "くっせぇ"),
        adjective("くさい", "くっせぇ"),
        // laughter
        interjection("うふ", "おほ"),
        interjection("うふふ", "おほほ"),
        interjection("う", "お"),
        interjection("ふふふ", "ほほほ"),
    ]
}

/// Noun or pronoun followed by a casual copula: `@1ですの`.
fn copula_after(head: FeaturePath, copula: &'static str) -> ContinuousRule {
    ContinuousRule::new(
        vec![pos_only(head), pos_surface(AUXILIARY_VERB, copula)],
        "@1ですの",
    )
    .kuten()
}

fn nan_desu(second: FeaturePath, surface: &'static str) -> ContinuousRule {
    ContinuousRule::new(
        vec![
            pos_surface(PRONOUN_GENERAL, "なん"),
            pos_surface(second, surface),
        ],
        "なんですの",
    )
    .kuten()
}

pub(super) fn continuous_rules() -> Vec<ContinuousRule> {
    let mut rules = vec![
        ContinuousRule::new(
            surface_sequence(&["壱", "百", "満天", "原", "サロメ"]),
            "壱百満天原サロメ",
        ),
        ContinuousRule::new(surface_sequence(&["壱", "百", "満天", "原"]), "壱百満天原"),
        ContinuousRule::new(surface_sequence(&["壱", "百", "満点"]), "壱百満点"),
        ContinuousRule::new(
            vec![
                pos_surface(VERB_INDEPENDENT, "し"),
                pos_surface(AUXILIARY_VERB, "ます"),
            ],
            "いたしますわ",
        )
        .long_note()
        .kuten(),
        ContinuousRule::new(
            vec![
                pos_surface(AUXILIARY_VERB, "だ"),
                pos_surface(PARTICLE_CONJUNCTIVE, "から"),
            ],
            "ですので",
        )
        .kuten(),
        ContinuousRule::new(
            vec![
                pos_surface(AUXILIARY_VERB, "な"),
                pos_surface(NOUN_DEPENDENT_GENERAL, "ん"),
                pos_surface(AUXILIARY_VERB, "だ"),
            ],
            "なんですの",
        )
        .kuten(),
        ContinuousRule::new(
            vec![
                pos_surface(AUXILIARY_VERB, "だ"),
                pos_surface(PARTICLE_SENTENCE_ENDING, "よ"),
            ],
            "ですわ",
        )
        .kuten(),
        nan_desu(PARTICLE_ADVERBIAL, "じゃ"),
        nan_desu(AUXILIARY_VERB, "だ"),
        nan_desu(PARTICLE_PARALLEL, "や"),
    ];
    for head in [NOUN_GENERAL, PRONOUN_GENERAL] {
        for copula in ["じゃ", "だ", "や"] {
            rules.push(copula_after(head, copula));
        }
    }
    rules
}

pub(super) fn exclude_rules() -> Result<Vec<ExcludeRule>, RegistryError> {
    Ok(vec![
        ExcludeRule::new(pos_surface(NOUN_PROPER_GENERAL, "カス")),
        // Long-vowel marks and wave dashes written as a standalone noun.
        ExcludeRule::new(ConditionSet::new(vec![
            Condition::Pos(NOUN_GENERAL),
            Condition::SurfacePattern(Regex::new(r"^(ー+|～+)$")?),
        ])),
    ])
}

fn ending_particle(surface: &'static str) -> ConditionSet {
    pos_surface(PARTICLE_SENTENCE_ENDING, surface)
}

fn sentence_openers() -> Vec<ConditionSet> {
    vec![pos_only(NOUN_GENERAL), pos_only(NOUN_SA_CONNECTING)]
}

fn sentence_verbs() -> Vec<ConditionSet> {
    vec![
        pos_base_form(VERB_INDEPENDENT, "する"),
        pos_base_form(VERB_INDEPENDENT, "やる"),
    ]
}

pub(super) fn sentence_ending_rules() -> Vec<SentenceEndingRule> {
    vec![
        SentenceEndingRule {
            openers: sentence_openers(),
            verbs: sentence_verbs(),
            auxiliary: Some(pos_surface(AUXILIARY_VERB, "う")),
            require_auxiliary: false,
            endings: vec![
                (
                    MeaningClass::Hope,
                    vec![ending_particle("ぜ"), ending_particle("よ"), ending_particle("べ")],
                ),
                (
                    MeaningClass::Poem,
                    vec![pos_surface(PARTICLE_ADVERBIAL_PARALLEL_ENDING, "か")],
                ),
                (MeaningClass::Prohibition, vec![ending_particle("な")]),
                (
                    MeaningClass::Coercion,
                    vec![ending_particle("ぞ"), ending_particle("の")],
                ),
            ],
            phrases: vec![
                (MeaningClass::Hope, vec!["をいたしませんこと"]),
                (MeaningClass::Poem, vec!["をいたしますわ"]),
                (MeaningClass::Prohibition, vec!["をしてはいけませんわ"]),
                (MeaningClass::Coercion, vec!["をいたしますわよ"]),
            ],
        },
        // 野球したぜ, サッカーやったよ: the past tense needs its particle to close the sentence.
        SentenceEndingRule {
            openers: sentence_openers(),
            verbs: sentence_verbs(),
            auxiliary: Some(pos_surface(AUXILIARY_VERB, "た")),
            require_auxiliary: true,
            endings: vec![(
                MeaningClass::Past,
                vec![
                    ending_particle("ぜ"),
                    ending_particle("よ"),
                    ending_particle("わ"),
                    ending_particle("ぞ"),
                    ending_particle("で"),
                    pos_surface(PARTICLE_CASE_GENERAL, "で"),
                ],
            )],
            phrases: vec![(MeaningClass::Past, vec!["をいたしましたわ"])],
        },
    ]
}
