use super::convert_quiet;
use crate::converter::testutil::{fixture_converter, fixture_tokens, FixtureTokenizer};
use crate::converter::{convert_tokens, ConvertError, ConvertOptions, Converter, Overrides};
use crate::random::SequenceRandom;
use crate::rules::RuleRegistry;

#[test]
fn test_herb_sentence() {
    assert_eq!(convert_quiet("これはハーブです"), "こちらはおハーブですわ");
}

#[test]
fn test_whitespace_is_preserved() {
    assert_eq!(convert_quiet("これは ハーブです\n"), "こちらは おハーブですわ\n");
}

#[test]
fn test_compound_verb_has_no_prefix() {
    assert_eq!(convert_quiet("プレイする"), "プレイいたしますわ");
}

#[test]
fn test_sentence_ending_hope() {
    assert_eq!(convert_quiet("野球しようぜ"), "お野球をいたしませんこと");
}

#[test]
fn test_sentence_ending_prohibition() {
    assert_eq!(convert_quiet("野球するな"), "お野球をしてはいけませんわ");
}

#[test]
fn test_sentence_ending_coercion_with_yaru() {
    assert_eq!(convert_quiet("野球やるぞ"), "お野球をいたしますわよ");
}

#[test]
fn test_sentence_ending_every_meaning_class() {
    assert_eq!(
        convert_quiet(
            "野球しようぜ。サッカーやろうよ。バスケやるか。柔道やるな。陸上すんな。テニスするぞ。卓球やるべ。ゲームするの。"
        ),
        "お野球をいたしませんこと。おサッカーをいたしませんこと。おバスケをいたしますわ。\
         お柔道をしてはいけませんわ。お陸上をしてはいけませんわ。おテニスをいたしますわよ。\
         お卓球をいたしませんこと。おゲームをいたしますわよ。"
    );
}

#[test]
fn test_sentence_ending_past_tense() {
    assert_eq!(
        convert_quiet("野球したぜ。サッカーやったよ。バスケしたで。柔道やったわ。陸上したぞ。"),
        "お野球をいたしましたわ。おサッカーをいたしましたわ。おバスケをいたしましたわ。\
         お柔道をいたしましたわ。お陸上をいたしましたわ。"
    );
}

#[test]
fn test_past_tense_mid_sentence_is_untouched() {
    assert_eq!(convert_quiet("野球した後。"), "野球した後。");
}

#[test]
fn test_sentence_ending_without_particle_at_end_of_input() {
    assert_eq!(convert_quiet("流鏑馬やろう"), "流鏑馬やろう");
}

#[test]
fn test_sentence_end_rule_fires_at_end_of_input() {
    // The past-tense rule runs out of tokens, so た closes the text on its own.
    assert_eq!(convert_quiet("野球した"), "野球したわ");
    assert_eq!(convert_quiet("プレイする"), "プレイいたしますわ");
}

#[test]
fn test_sentence_ending_needs_a_particle() {
    // 場合 does not classify, and する is not at a sentence break.
    assert_eq!(convert_quiet("変換する場合"), "変換する場合");
}

#[test]
fn test_already_polite_reading() {
    assert_eq!(convert_quiet("お嬢様"), "お嬢様");
}

#[test]
fn test_mashi_after_particle() {
    assert_eq!(convert_quiet("わたしも使ってました"), "わたくしも使っておりましたわ");
}

#[test]
fn test_before_ignore_keeps_mashi() {
    let converter = fixture_converter();
    let options = ConvertOptions {
        disable_kuten_promotion: true,
        overrides: Overrides::long_note(2, 3, 0),
    };
    let mut rng = SequenceRandom::new(Vec::new());
    let got = converter
        .convert_with_rng("ハーブがありました！", &options, &mut rng)
        .unwrap();
    assert_eq!(got, "おハーブがありましたわ～～！！！");
}

#[test]
fn test_before_ignore_keeps_nai() {
    assert_eq!(convert_quiet("限らない"), "限らない");
}

#[test]
fn test_prefix_only_on_first_noun_of_run() {
    assert_eq!(convert_quiet("一般女性。"), "お一般女性。");
}

#[test]
fn test_after_ignore_papa_ue() {
    assert_eq!(convert_quiet("パパ、パパ上"), "おパパ上、おパパ上");
}

#[test]
fn test_exclude_rule() {
    assert_eq!(convert_quiet("カス"), "カス");
}

#[test]
fn test_disable_prefix_rule() {
    assert_eq!(convert_quiet("皆、皆様"), "皆様方、皆様方");
}

#[test]
fn test_ascii_word_is_literal() {
    assert_eq!(convert_quiet("これはgrassです"), "こちらはgrassですわ");
}

#[test]
fn test_continuous_rule_consumes_span() {
    assert_eq!(convert_quiet("壱百満天原サロメ"), "壱百満天原サロメ");
}

#[test]
fn test_continuous_rule_beats_single_rule() {
    // それ alone would become そちら.
    assert_eq!(convert_quiet("それだ。"), "それですの。");
    assert_eq!(convert_quiet("なんだ"), "なんですの");
}

#[test]
fn test_da_kara() {
    assert_eq!(convert_quiet("好きだから"), "好きですので");
}

#[test]
fn test_literal_prefix_suppresses_honorific() {
    assert_eq!(convert_quiet("お部屋"), "お部屋");
}

#[test]
fn test_sa_connector_suppresses_honorific() {
    assert_eq!(convert_quiet("横断歩道"), "横断歩道");
}

#[test]
fn test_adjective_gets_polite_suffix() {
    assert_eq!(convert_quiet("悲しい。"), "悲しいですわ。");
}

#[test]
fn test_second_person_pronouns() {
    assert_eq!(
        convert_quiet("あなたは。あんたは。おまえは。お前は。てめぇは。てめえは。貴様は。君は。"),
        "貴方は。貴方は。貴方は。貴方は。貴方は。貴方は。貴方は。貴方は。"
    );
}

#[test]
fn test_first_person_pronouns() {
    assert_eq!(
        convert_quiet("俺は。オレは。おれは。僕は。ボクは。ぼくは。あたしは。わたしは。"),
        "私は。ワタクシは。わたくしは。私は。ワタクシは。わたくしは。わたくしは。わたくしは。"
    );
}

#[test]
fn test_demonstratives() {
    assert_eq!(
        convert_quiet("これ、この、ここ、こちら、こう、こんな。"),
        "こちら、こちらの、こちら、こちら、こう、このような。"
    );
    assert_eq!(
        convert_quiet("あれは、あの、あそこ、あちら、ああ、あんな。"),
        "あちらは、あちらの、あちら、あちら、ああ、あのような。"
    );
}

#[test]
fn test_laughter_run() {
    assert_eq!(convert_quiet("うふふふふ"), "おほほほほ");
}

#[test]
fn test_question_ending_and_noun_run() {
    assert_eq!(
        convert_quiet("ビデオテープはどこで使うんですか"),
        "おビデオテープはどちらで使うんですの"
    );
}

#[test]
fn test_kudasai_before_exclamation() {
    assert_eq!(convert_quiet("お使いください！"), "お使いくださいまし！");
}

#[test]
fn test_prefix_per_sentence() {
    assert_eq!(
        convert_quiet("一般女性。経年劣化。トップシークレット"),
        "お一般女性。お経年劣化。おトップシークレット"
    );
}

#[test]
fn test_reading_starting_with_o_has_no_prefix() {
    assert_eq!(
        convert_quiet("追い剥ぎ、大型、大分、おろし金"),
        "追い剥ぎ、大型、大分、おろし金"
    );
}

#[test]
fn test_parent_titles() {
    assert_eq!(
        convert_quiet("パパ、ママ、父様、母様、パパ上、ママ上"),
        "おパパ上、おママ上、お父様、お母様、おパパ上、おママ上"
    );
}

#[test]
fn test_casual_copulas() {
    assert_eq!(
        convert_quiet("アホだ。カラスや。バナナじゃ。これだ。それや。あれじゃ。"),
        "おアホですの。おカラスですの。おバナナですの。これですの。それですの。あれですの。"
    );
    assert_eq!(
        convert_quiet("なんじゃこれ。なんだこれ。なんやこれ。"),
        "なんですのこちら。なんですのこちら。なんですのこちら。"
    );
}

#[test]
fn test_salome_surname_after_noun() {
    assert_eq!(
        convert_quiet("わたしの名字は壱百満天原です"),
        "わたくしのお名字は壱百満天原ですわ"
    );
}

#[test]
fn test_polite_verbs() {
    assert_eq!(convert_quiet("使用します"), "使用いたしますわ");
    assert_eq!(
        convert_quiet("〇〇をプレイする。きたないわ。"),
        "〇〇をプレイいたしますわ。きったねぇですわ。"
    );
    assert_eq!(
        convert_quiet("テキストファイルをまるごと変換する場合は、以下のように実行します。"),
        "おテキストファイルをまるごと変換する場合は、以下のように実行いたしますわ。"
    );
}

#[test]
fn test_story_paragraph() {
    assert_eq!(
        convert_quiet("信じてもいいし、信じなくても良い。まぁ、ゆったり聞いてくれ。夜は長いからな。"),
        "信じてもいいですし、信じなくても良いですわ。まぁ、ゆったり聞いてくださいまし。夜は長いのでね。"
    );
}

#[test]
fn test_kuten_promotion_forced() {
    let converter = fixture_converter();
    let mut options = ConvertOptions::default();
    options.overrides.kuten_choice = Some(3);
    let mut rng = SequenceRandom::new(Vec::new());
    assert_eq!(
        converter
            .convert_with_rng("プレイする。ショットガンだ。", &options, &mut rng)
            .unwrap(),
        "プレイいたしますわ❗おショットガンですの❗"
    );
    assert_eq!(
        converter
            .convert_with_rng("悲しい。", &options, &mut rng)
            .unwrap(),
        "悲しいですわ❗"
    );
}

#[test]
fn test_kuten_promotion_disabled_wins_over_override() {
    let converter = fixture_converter();
    let mut options = ConvertOptions::default();
    options.overrides.kuten_choice = Some(3);
    options.disable_kuten_promotion = true;
    let mut rng = SequenceRandom::new(Vec::new());
    assert_eq!(
        converter
            .convert_with_rng("プレイする。ショットガンだ。", &options, &mut rng)
            .unwrap(),
        "プレイいたしますわ。おショットガンですの。"
    );
}

#[test]
fn test_kuten_promotion_follows_random_source() {
    let converter = fixture_converter();
    let options = ConvertOptions::default();
    // Slot 2 of the pool is the full-width exclamation.
    let mut rng = SequenceRandom::new(vec![2]);
    assert_eq!(
        converter
            .convert_with_rng("悲しい。", &options, &mut rng)
            .unwrap(),
        "悲しいですわ！"
    );
}

#[test]
fn test_out_of_range_candidate_falls_back() {
    let converter = fixture_converter();
    let mut options = ConvertOptions::default();
    options.overrides.sentence_ending_candidate = Some(9);
    let mut rng = SequenceRandom::new(vec![0]);
    assert_eq!(
        converter
            .convert_with_rng("野球しようぜ", &options, &mut rng)
            .unwrap(),
        "お野球をいたしませんこと"
    );
}

#[test]
fn test_convert_tokens_matches_converter() {
    let registry = RuleRegistry::builtin().unwrap();
    let tokens = fixture_tokens("これはハーブです");
    let mut rng = SequenceRandom::new(vec![0]);
    let got = convert_tokens(&registry, &tokens, &ConvertOptions::default(), &mut rng);
    assert_eq!(got, "こちらはおハーブですわ");
}

#[test]
fn test_empty_input() {
    let registry = RuleRegistry::builtin().unwrap();
    let mut rng = SequenceRandom::new(vec![0]);
    assert_eq!(
        convert_tokens(&registry, &[], &ConvertOptions::default(), &mut rng),
        ""
    );
}

#[test]
fn test_tokenizer_failure_propagates() {
    let converter = Converter::with_builtin_rules(Box::new(FixtureTokenizer)).unwrap();
    let err = converter
        .convert("no such fixture", &ConvertOptions::default())
        .unwrap_err();
    assert!(matches!(err, ConvertError::Tokenize(_)));
}

#[test]
fn test_registry_is_shared() {
    let a = fixture_converter();
    let b = Converter::new(a.registry().clone(), Box::new(FixtureTokenizer));
    assert!(std::sync::Arc::ptr_eq(a.registry(), b.registry()));
    assert_eq!(
        b.convert("これはハーブです", &ConvertOptions::default()).unwrap(),
        "こちらはおハーブですわ"
    );
}
