#![cfg(test)]

use crate::random::SequenceRandom;
use crate::tokenizer::{align_with_source, parse_mecab, Token, TokenizeError, Tokenizer};

use super::{ConvertOptions, Converter};

/// IPADIC analyses of the sentences used across converter tests.
///
/// The text is what a caller passes in; the analysis is what MeCab prints for it.
pub const FIXTURES: &[(&str, &str)] = &[
    (
        "これはハーブです",
        "これ\t名詞,代名詞,一般,*,*,*,これ,コレ,コレ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
ハーブ\t名詞,一般,*,*,*,*,ハーブ,ハーブ,ハーブ
です\t助動詞,*,*,*,特殊・デス,基本形,です,デス,デス
EOS
",
    ),
    (
        "これはハーブです！",
        "これ\t名詞,代名詞,一般,*,*,*,これ,コレ,コレ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
ハーブ\t名詞,一般,*,*,*,*,ハーブ,ハーブ,ハーブ
です\t助動詞,*,*,*,特殊・デス,基本形,です,デス,デス
！\t記号,一般,*,*,*,*,！,！,！
EOS
",
    ),
    (
        "これは ハーブです\n",
        "これ\t名詞,代名詞,一般,*,*,*,これ,コレ,コレ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
ハーブ\t名詞,一般,*,*,*,*,ハーブ,ハーブ,ハーブ
です\t助動詞,*,*,*,特殊・デス,基本形,です,デス,デス
EOS
",
    ),
    (
        "プレイする",
        "プレイ\t名詞,サ変接続,*,*,*,*,プレイ,プレイ,プレイ
する\t動詞,自立,*,*,サ変・スル,基本形,する,スル,スル
EOS
",
    ),
    (
        "プレイする。ショットガンだ。",
        "プレイ\t名詞,サ変接続,*,*,*,*,プレイ,プレイ,プレイ
する\t動詞,自立,*,*,サ変・スル,基本形,する,スル,スル
。\t記号,句点,*,*,*,*,。,。,。
ショットガン\t名詞,一般,*,*,*,*,ショットガン,ショットガン,ショットガン
だ\t助動詞,*,*,*,特殊・ダ,基本形,だ,ダ,ダ
。\t記号,句点,*,*,*,*,。,。,。
EOS
",
    ),
    (
        "野球しようぜ",
        "野球\t名詞,一般,*,*,*,*,野球,ヤキュウ,ヤキュー
しよ\t動詞,自立,*,*,サ変・スル,未然ウ接続,する,シヨ,シヨ
う\t助動詞,*,*,*,不変化型,基本形,う,ウ,ウ
ぜ\t助詞,終助詞,*,*,*,*,ぜ,ゼ,ゼ
EOS
",
    ),
    (
        "野球するな",
        "野球\t名詞,一般,*,*,*,*,野球,ヤキュウ,ヤキュー
する\t動詞,自立,*,*,サ変・スル,基本形,する,スル,スル
な\t助詞,終助詞,*,*,*,*,な,ナ,ナ
EOS
",
    ),
    (
        "野球やるぞ",
        "野球\t名詞,一般,*,*,*,*,野球,ヤキュウ,ヤキュー
やる\t動詞,自立,*,*,五段・ラ行,基本形,やる,ヤル,ヤル
ぞ\t助詞,終助詞,*,*,*,*,ぞ,ゾ,ゾ
EOS
",
    ),
    (
        "変換する場合",
        "変換\t名詞,サ変接続,*,*,*,*,変換,ヘンカン,ヘンカン
する\t動詞,自立,*,*,サ変・スル,基本形,する,スル,スル
場合\t名詞,副詞可能,*,*,*,*,場合,バアイ,バアイ
EOS
",
    ),
    (
        "お嬢様",
        "お嬢様\t名詞,一般,*,*,*,*,お嬢様,オジョウサマ,オジョーサマ
EOS
",
    ),
    (
        "わたしも使ってました",
        "わたし\t名詞,代名詞,一般,*,*,*,わたし,ワタシ,ワタシ
も\t助詞,係助詞,*,*,*,*,も,モ,モ
使っ\t動詞,自立,*,*,五段・ワ行促音便,連用タ接続,使う,ツカッ,ツカッ
て\t助詞,接続助詞,*,*,*,*,て,テ,テ
まし\t助動詞,*,*,*,特殊・マス,連用形,ます,マシ,マシ
た\t助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
EOS
",
    ),
    (
        "ハーブがありました！",
        "ハーブ\t名詞,一般,*,*,*,*,ハーブ,ハーブ,ハーブ
が\t助詞,格助詞,一般,*,*,*,が,ガ,ガ
あり\t動詞,自立,*,*,五段・ラ行,連用形,ある,アリ,アリ
まし\t助動詞,*,*,*,特殊・マス,連用形,ます,マシ,マシ
た\t助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
！\t記号,一般,*,*,*,*,！,！,！
EOS
",
    ),
    (
        "限らない",
        "限ら\t動詞,自立,*,*,五段・ラ行,未然形,限る,カギラ,カギラ
ない\t助動詞,*,*,*,特殊・ナイ,基本形,ない,ナイ,ナイ
EOS
",
    ),
    (
        "一般女性。",
        "一般\t名詞,一般,*,*,*,*,一般,イッパン,イッパン
女性\t名詞,一般,*,*,*,*,女性,ジョセイ,ジョセイ
。\t記号,句点,*,*,*,*,。,。,。
EOS
",
    ),
    (
        "パパ、パパ上",
        "パパ\t名詞,一般,*,*,*,*,パパ,パパ,パパ
、\t記号,読点,*,*,*,*,、,、,、
パパ\t名詞,一般,*,*,*,*,パパ,パパ,パパ
上\t名詞,接尾,一般,*,*,*,上,ウエ,ウエ
EOS
",
    ),
    (
        "カス",
        "カス\t名詞,固有名詞,一般,*,*,*,カス,カス,カス
EOS
",
    ),
    (
        "皆、皆様",
        "皆\t名詞,代名詞,一般,*,*,*,皆,ミナ,ミナ
、\t記号,読点,*,*,*,*,、,、,、
皆様\t名詞,一般,*,*,*,*,皆様,ミナサマ,ミナサマ
EOS
",
    ),
    (
        "これはgrassです",
        "これ\t名詞,代名詞,一般,*,*,*,これ,コレ,コレ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
grass\t名詞,固有名詞,組織,*,*,*,*
です\t助動詞,*,*,*,特殊・デス,基本形,です,デス,デス
EOS
",
    ),
    (
        "悲しい。",
        "悲しい\t形容詞,自立,*,*,形容詞・イ段,基本形,悲しい,カナシイ,カナシイ
。\t記号,句点,*,*,*,*,。,。,。
EOS
",
    ),
    (
        "です！？!?❗❓",
        "です\t助動詞,*,*,*,特殊・デス,基本形,です,デス,デス
！\t記号,一般,*,*,*,*,！,！,！
？\t記号,一般,*,*,*,*,？,？,？
!?\t記号,一般,*,*,*,*,*
❗❓\t記号,一般,*,*,*,*,*
EOS
",
    ),
    (
        "です！寿司",
        "です\t助動詞,*,*,*,特殊・デス,基本形,です,デス,デス
！\t記号,一般,*,*,*,*,！,！,！
寿司\t名詞,一般,*,*,*,*,寿司,スシ,スシ
EOS
",
    ),
    (
        "壱百満天原サロメ",
        "壱\t名詞,数,*,*,*,*,壱,イチ,イチ
百\t名詞,数,*,*,*,*,百,ヒャク,ヒャク
満天\t名詞,一般,*,*,*,*,満天,マンテン,マンテン
原\t名詞,接尾,一般,*,*,*,原,ハラ,ハラ
サロメ\t名詞,固有名詞,人名,名,*,*,サロメ,サロメ,サロメ
EOS
",
    ),
    (
        "勉強します！",
        "勉強\t名詞,サ変接続,*,*,*,*,勉強,ベンキョウ,ベンキョー
し\t動詞,自立,*,*,サ変・スル,連用形,する,シ,シ
ます\t助動詞,*,*,*,特殊・マス,基本形,ます,マス,マス
！\t記号,一般,*,*,*,*,！,！,！
EOS
",
    ),
    (
        "なんだ",
        "なん\t名詞,代名詞,一般,*,*,*,なん,ナン,ナン
だ\t助動詞,*,*,*,特殊・ダ,基本形,だ,ダ,ダ
EOS
",
    ),
    (
        "それだ。",
        "それ\t名詞,代名詞,一般,*,*,*,それ,ソレ,ソレ
だ\t助動詞,*,*,*,特殊・ダ,基本形,だ,ダ,ダ
。\t記号,句点,*,*,*,*,。,。,。
EOS
",
    ),
    (
        "好きだから",
        "好き\t名詞,形容動詞語幹,*,*,*,*,好き,スキ,スキ
だ\t助動詞,*,*,*,特殊・ダ,基本形,だ,ダ,ダ
から\t助詞,接続助詞,*,*,*,*,から,カラ,カラ
EOS
",
    ),
    (
        "お部屋",
        "お\t接頭詞,名詞接続,*,*,*,*,お,オ,オ
部屋\t名詞,一般,*,*,*,*,部屋,ヘヤ,ヘヤ
EOS
",
    ),
    (
        "横断歩道",
        "横断\t名詞,サ変接続,*,*,*,*,横断,オウダン,オーダン
歩道\t名詞,一般,*,*,*,*,歩道,ホドウ,ホドー
EOS
",
    ),
    (
        "野球したぜ。サッカーやったよ。バスケしたで。柔道やったわ。陸上したぞ。",
        "野球\t名詞,一般,*,*,*,*,野球,ヤキュウ,ヤキュウ
し\t動詞,自立,*,*,サ変・スル,連用形,する,シ,シ
た\t助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
ぜ\t助詞,終助詞,*,*,*,*,ぜ,ゼ,ゼ
。\t記号,句点,*,*,*,*,。,。,。
サッカー\t名詞,一般,*,*,*,*,サッカー,サッカー,サッカー
やっ\t動詞,自立,*,*,五段・ラ行,連用タ接続,やる,ヤッ,ヤッ
た\t助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
よ\t助詞,終助詞,*,*,*,*,よ,ヨ,ヨ
。\t記号,句点,*,*,*,*,。,。,。
バスケ\t名詞,一般,*,*,*,*,バスケ,バスケ,バスケ
し\t動詞,自立,*,*,サ変・スル,連用形,する,シ,シ
た\t助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
で\t助詞,格助詞,一般,*,*,*,で,デ,デ
。\t記号,句点,*,*,*,*,。,。,。
柔道\t名詞,一般,*,*,*,*,柔道,ジュウドウ,ジュウドウ
やっ\t動詞,自立,*,*,五段・ラ行,連用タ接続,やる,ヤッ,ヤッ
た\t助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
わ\t助詞,終助詞,*,*,*,*,わ,ワ,ワ
。\t記号,句点,*,*,*,*,。,。,。
陸上\t名詞,一般,*,*,*,*,陸上,リクジョウ,リクジョウ
し\t動詞,自立,*,*,サ変・スル,連用形,する,シ,シ
た\t助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
ぞ\t助詞,終助詞,*,*,*,*,ぞ,ゾ,ゾ
。\t記号,句点,*,*,*,*,。,。,。
EOS
",
    ),
    (
        "野球した後。",
        "野球\t名詞,一般,*,*,*,*,野球,ヤキュウ,ヤキュウ
し\t動詞,自立,*,*,サ変・スル,連用形,する,シ,シ
た\t助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
後\t名詞,副詞可能,*,*,*,*,後,アト,アト
。\t記号,句点,*,*,*,*,。,。,。
EOS
",
    ),
    (
        "野球した",
        "野球\t名詞,一般,*,*,*,*,野球,ヤキュウ,ヤキュウ
し\t動詞,自立,*,*,サ変・スル,連用形,する,シ,シ
た\t助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
EOS
",
    ),
    (
        "流鏑馬やろう",
        "流鏑馬\t名詞,一般,*,*,*,*,流鏑馬,ヤブサメ,ヤブサメ
やろ\t動詞,自立,*,*,五段・ラ行,未然ウ接続,やる,ヤロ,ヤロ
う\t助動詞,*,*,*,不変化型,基本形,う,ウ,ウ
EOS
",
    ),
    (
        "野球しようぜ。サッカーやろうよ。バスケやるか。柔道やるな。陸上すんな。テニスするぞ。卓球やるべ。ゲームするの。",
        "野球\t名詞,一般,*,*,*,*,野球,ヤキュウ,ヤキュウ
しよ\t動詞,自立,*,*,サ変・スル,未然ウ接続,する,シヨ,シヨ
う\t助動詞,*,*,*,不変化型,基本形,う,ウ,ウ
ぜ\t助詞,終助詞,*,*,*,*,ぜ,ゼ,ゼ
。\t記号,句点,*,*,*,*,。,。,。
サッカー\t名詞,一般,*,*,*,*,サッカー,サッカー,サッカー
やろ\t動詞,自立,*,*,五段・ラ行,未然ウ接続,やる,ヤロ,ヤロ
う\t助動詞,*,*,*,不変化型,基本形,う,ウ,ウ
よ\t助詞,終助詞,*,*,*,*,よ,ヨ,ヨ
。\t記号,句点,*,*,*,*,。,。,。
バスケ\t名詞,一般,*,*,*,*,バスケ,バスケ,バスケ
やる\t動詞,自立,*,*,五段・ラ行,基本形,やる,ヤル,ヤル
か\t助詞,副助詞／並立助詞／終助詞,*,*,*,*,か,カ,カ
。\t記号,句点,*,*,*,*,。,。,。
柔道\t名詞,一般,*,*,*,*,柔道,ジュウドウ,ジュウドウ
やる\t動詞,自立,*,*,五段・ラ行,基本形,やる,ヤル,ヤル
な\t助詞,終助詞,*,*,*,*,な,ナ,ナ
。\t記号,句点,*,*,*,*,。,。,。
陸上\t名詞,一般,*,*,*,*,陸上,リクジョウ,リクジョウ
すん\t動詞,自立,*,*,サ変・スル,体言接続特殊,する,スン,スン
な\t助詞,終助詞,*,*,*,*,な,ナ,ナ
。\t記号,句点,*,*,*,*,。,。,。
テニス\t名詞,一般,*,*,*,*,テニス,テニス,テニス
する\t動詞,自立,*,*,サ変・スル,基本形,する,スル,スル
ぞ\t助詞,終助詞,*,*,*,*,ぞ,ゾ,ゾ
。\t記号,句点,*,*,*,*,。,。,。
卓球\t名詞,一般,*,*,*,*,卓球,タッキュウ,タッキュウ
やる\t動詞,自立,*,*,五段・ラ行,基本形,やる,ヤル,ヤル
べ\t助詞,終助詞,*,*,*,*,べ,ベ,ベ
。\t記号,句点,*,*,*,*,。,。,。
ゲーム\t名詞,一般,*,*,*,*,ゲーム,ゲーム,ゲーム
する\t動詞,自立,*,*,サ変・スル,基本形,する,スル,スル
の\t助詞,終助詞,*,*,*,*,の,ノ,ノ
。\t記号,句点,*,*,*,*,。,。,。
EOS
",
    ),
    (
        "あなたは。あんたは。おまえは。お前は。てめぇは。てめえは。貴様は。君は。",
        "あなた\t名詞,代名詞,一般,*,*,*,あなた,アナタ,アナタ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
。\t記号,句点,*,*,*,*,。,。,。
あんた\t名詞,代名詞,一般,*,*,*,あんた,アンタ,アンタ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
。\t記号,句点,*,*,*,*,。,。,。
おまえ\t名詞,代名詞,一般,*,*,*,おまえ,オマエ,オマエ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
。\t記号,句点,*,*,*,*,。,。,。
お前\t名詞,代名詞,一般,*,*,*,お前,オマエ,オマエ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
。\t記号,句点,*,*,*,*,。,。,。
てめぇ\t名詞,代名詞,一般,*,*,*,てめぇ,テメェ,テメェ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
。\t記号,句点,*,*,*,*,。,。,。
てめえ\t名詞,代名詞,一般,*,*,*,てめえ,テメエ,テメエ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
。\t記号,句点,*,*,*,*,。,。,。
貴様\t名詞,一般,*,*,*,*,貴様,キサマ,キサマ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
。\t記号,句点,*,*,*,*,。,。,。
君\t名詞,代名詞,一般,*,*,*,君,キミ,キミ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
。\t記号,句点,*,*,*,*,。,。,。
EOS
",
    ),
    (
        "俺は。オレは。おれは。僕は。ボクは。ぼくは。あたしは。わたしは。",
        "俺\t名詞,代名詞,一般,*,*,*,俺,オレ,オレ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
。\t記号,句点,*,*,*,*,。,。,。
オレ\t名詞,代名詞,一般,*,*,*,オレ,オレ,オレ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
。\t記号,句点,*,*,*,*,。,。,。
おれ\t名詞,代名詞,一般,*,*,*,おれ,オレ,オレ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
。\t記号,句点,*,*,*,*,。,。,。
僕\t名詞,代名詞,一般,*,*,*,僕,ボク,ボク
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
。\t記号,句点,*,*,*,*,。,。,。
ボク\t名詞,代名詞,一般,*,*,*,ボク,ボク,ボク
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
。\t記号,句点,*,*,*,*,。,。,。
ぼく\t名詞,代名詞,一般,*,*,*,ぼく,ボク,ボク
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
。\t記号,句点,*,*,*,*,。,。,。
あたし\t名詞,代名詞,一般,*,*,*,あたし,アタシ,アタシ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
。\t記号,句点,*,*,*,*,。,。,。
わたし\t名詞,代名詞,一般,*,*,*,わたし,ワタシ,ワタシ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
。\t記号,句点,*,*,*,*,。,。,。
EOS
",
    ),
    (
        "これ、この、ここ、こちら、こう、こんな。",
        "これ\t名詞,代名詞,一般,*,*,*,これ,コレ,コレ
、\t記号,読点,*,*,*,*,、,、,、
この\t連体詞,*,*,*,*,*,この,コノ,コノ
、\t記号,読点,*,*,*,*,、,、,、
ここ\t名詞,代名詞,一般,*,*,*,ここ,ココ,ココ
、\t記号,読点,*,*,*,*,、,、,、
こちら\t名詞,代名詞,一般,*,*,*,こちら,コチラ,コチラ
、\t記号,読点,*,*,*,*,、,、,、
こう\t副詞,助詞類接続,*,*,*,*,こう,コウ,コー
、\t記号,読点,*,*,*,*,、,、,、
こんな\t連体詞,*,*,*,*,*,こんな,コンナ,コンナ
。\t記号,句点,*,*,*,*,。,。,。
EOS
",
    ),
    (
        "あれは、あの、あそこ、あちら、ああ、あんな。",
        "あれ\t名詞,代名詞,一般,*,*,*,あれ,アレ,アレ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
、\t記号,読点,*,*,*,*,、,、,、
あの\t連体詞,*,*,*,*,*,あの,アノ,アノ
、\t記号,読点,*,*,*,*,、,、,、
あそこ\t名詞,代名詞,一般,*,*,*,あそこ,アソコ,アソコ
、\t記号,読点,*,*,*,*,、,、,、
あちら\t名詞,代名詞,一般,*,*,*,あちら,アチラ,アチラ
、\t記号,読点,*,*,*,*,、,、,、
ああ\t副詞,助詞類接続,*,*,*,*,ああ,アア,アー
、\t記号,読点,*,*,*,*,、,、,、
あんな\t連体詞,*,*,*,*,*,あんな,アンナ,アンナ
。\t記号,句点,*,*,*,*,。,。,。
EOS
",
    ),
    (
        "うふふふふ",
        "うふ\t感動詞,*,*,*,*,*,うふ,ウフ,ウフ
ふふふ\t感動詞,*,*,*,*,*,ふふふ,フフフ,フフフ
EOS
",
    ),
    (
        "ビデオテープはどこで使うんですか",
        "ビデオ\t名詞,一般,*,*,*,*,ビデオ,ビデオ,ビデオ
テープ\t名詞,一般,*,*,*,*,テープ,テープ,テープ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
どこ\t名詞,代名詞,一般,*,*,*,どこ,ドコ,ドコ
で\t助詞,格助詞,一般,*,*,*,で,デ,デ
使う\t動詞,自立,*,*,五段・ワ行促音便,基本形,使う,ツカウ,ツカウ
ん\t名詞,非自立,一般,*,*,*,ん,ン,ン
です\t助動詞,*,*,*,特殊・デス,基本形,です,デス,デス
か\t助詞,副助詞／並立助詞／終助詞,*,*,*,*,か,カ,カ
EOS
",
    ),
    (
        "お使いください！",
        "お\t接頭詞,動詞接続,*,*,*,*,お,オ,オ
使い\t動詞,自立,*,*,五段・ワ行促音便,連用形,使う,ツカイ,ツカイ
ください\t動詞,非自立,*,*,五段・ラ行特殊,命令ｉ,くださる,クダサイ,クダサイ
！\t記号,一般,*,*,*,*,！,！,！
EOS
",
    ),
    (
        "一般女性。経年劣化。トップシークレット",
        "一般\t名詞,一般,*,*,*,*,一般,イッパン,イッパン
女性\t名詞,一般,*,*,*,*,女性,ジョセイ,ジョセイ
。\t記号,句点,*,*,*,*,。,。,。
経年\t名詞,一般,*,*,*,*,経年,ケイネン,ケイネン
劣化\t名詞,サ変接続,*,*,*,*,劣化,レッカ,レッカ
。\t記号,句点,*,*,*,*,。,。,。
トップ\t名詞,一般,*,*,*,*,トップ,トップ,トップ
シークレット\t名詞,一般,*,*,*,*,シークレット,シークレット,シークレット
EOS
",
    ),
    (
        "信じてもいいし、信じなくても良い。まぁ、ゆったり聞いてくれ。夜は長いからな。",
        "信じ\t動詞,自立,*,*,一段,連用形,信じる,シンジ,シンジ
て\t助詞,接続助詞,*,*,*,*,て,テ,テ
も\t助詞,係助詞,*,*,*,*,も,モ,モ
いい\t形容詞,自立,*,*,形容詞・イイ,基本形,いい,イイ,イイ
し\t助詞,接続助詞,*,*,*,*,し,シ,シ
、\t記号,読点,*,*,*,*,、,、,、
信じ\t動詞,自立,*,*,一段,未然形,信じる,シンジ,シンジ
なく\t助動詞,*,*,*,特殊・ナイ,連用テ接続,ない,ナク,ナク
て\t助詞,接続助詞,*,*,*,*,て,テ,テ
も\t助詞,係助詞,*,*,*,*,も,モ,モ
良い\t形容詞,自立,*,*,形容詞・アウオ段,基本形,良い,ヨイ,ヨイ
。\t記号,句点,*,*,*,*,。,。,。
まぁ\t感動詞,*,*,*,*,*,まぁ,マァ,マァ
、\t記号,読点,*,*,*,*,、,、,、
ゆったり\t副詞,一般,*,*,*,*,ゆったり,ユッタリ,ユッタリ
聞い\t動詞,自立,*,*,五段・カ行イ音便,連用タ接続,聞く,キイ,キイ
て\t助詞,接続助詞,*,*,*,*,て,テ,テ
くれ\t動詞,非自立,*,*,一段・クレル,命令ｙｏ,くれる,クレ,クレ
。\t記号,句点,*,*,*,*,。,。,。
夜\t名詞,副詞可能,*,*,*,*,夜,ヨル,ヨル
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
長い\t形容詞,自立,*,*,形容詞・アウオ段,基本形,長い,ナガイ,ナガイ
から\t助詞,接続助詞,*,*,*,*,から,カラ,カラ
な\t助詞,終助詞,*,*,*,*,な,ナ,ナ
。\t記号,句点,*,*,*,*,。,。,。
EOS
",
    ),
    (
        "テキストファイルをまるごと変換する場合は、以下のように実行します。",
        "テキスト\t名詞,一般,*,*,*,*,テキスト,テキスト,テキスト
ファイル\t名詞,一般,*,*,*,*,ファイル,ファイル,ファイル
を\t助詞,格助詞,一般,*,*,*,を,ヲ,ヲ
まるごと\t副詞,一般,*,*,*,*,まるごと,マルゴト,マルゴト
変換\t名詞,サ変接続,*,*,*,*,変換,ヘンカン,ヘンカン
する\t動詞,自立,*,*,サ変・スル,基本形,する,スル,スル
場合\t名詞,副詞可能,*,*,*,*,場合,バアイ,バアイ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
、\t記号,読点,*,*,*,*,、,、,、
以下\t名詞,非自立,副詞可能,*,*,*,以下,イカ,イカ
の\t助詞,連体化,*,*,*,*,の,ノ,ノ
よう\t名詞,非自立,助動詞語幹,*,*,*,よう,ヨウ,ヨー
に\t助詞,副詞化,*,*,*,*,に,ニ,ニ
実行\t名詞,サ変接続,*,*,*,*,実行,ジッコウ,ジッコウ
し\t動詞,自立,*,*,サ変・スル,連用形,する,シ,シ
ます\t助動詞,*,*,*,特殊・マス,基本形,ます,マス,マス
。\t記号,句点,*,*,*,*,。,。,。
EOS
",
    ),
    (
        "わたしの名字は壱百満天原です",
        "わたし\t名詞,代名詞,一般,*,*,*,わたし,ワタシ,ワタシ
の\t助詞,連体化,*,*,*,*,の,ノ,ノ
名字\t名詞,一般,*,*,*,*,名字,ミョウジ,ミョウジ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
壱\t名詞,数,*,*,*,*,壱,イチ,イチ
百\t名詞,数,*,*,*,*,百,ヒャク,ヒャク
満天\t名詞,一般,*,*,*,*,満天,マンテン,マンテン
原\t名詞,接尾,一般,*,*,*,原,ハラ,ハラ
です\t助動詞,*,*,*,特殊・デス,基本形,です,デス,デス
EOS
",
    ),
    (
        "アホだ。カラスや。バナナじゃ。これだ。それや。あれじゃ。",
        "アホ\t名詞,一般,*,*,*,*,アホ,アホ,アホ
だ\t助動詞,*,*,*,特殊・ダ,基本形,だ,ダ,ダ
。\t記号,句点,*,*,*,*,。,。,。
カラス\t名詞,一般,*,*,*,*,カラス,カラス,カラス
や\t助動詞,*,*,*,特殊・ヤ,基本形,や,ヤ,ヤ
。\t記号,句点,*,*,*,*,。,。,。
バナナ\t名詞,一般,*,*,*,*,バナナ,バナナ,バナナ
じゃ\t助動詞,*,*,*,特殊・ダ,連用形,だ,ジャ,ジャ
。\t記号,句点,*,*,*,*,。,。,。
これ\t名詞,代名詞,一般,*,*,*,これ,コレ,コレ
だ\t助動詞,*,*,*,特殊・ダ,基本形,だ,ダ,ダ
。\t記号,句点,*,*,*,*,。,。,。
それ\t名詞,代名詞,一般,*,*,*,それ,ソレ,ソレ
や\t助動詞,*,*,*,特殊・ヤ,基本形,や,ヤ,ヤ
。\t記号,句点,*,*,*,*,。,。,。
あれ\t名詞,代名詞,一般,*,*,*,あれ,アレ,アレ
じゃ\t助動詞,*,*,*,特殊・ダ,連用形,だ,ジャ,ジャ
。\t記号,句点,*,*,*,*,。,。,。
EOS
",
    ),
    (
        "なんじゃこれ。なんだこれ。なんやこれ。",
        "なん\t名詞,代名詞,一般,*,*,*,なん,ナン,ナン
じゃ\t助詞,副助詞,*,*,*,*,じゃ,ジャ,ジャ
これ\t名詞,代名詞,一般,*,*,*,これ,コレ,コレ
。\t記号,句点,*,*,*,*,。,。,。
なん\t名詞,代名詞,一般,*,*,*,なん,ナン,ナン
だ\t助動詞,*,*,*,特殊・ダ,基本形,だ,ダ,ダ
これ\t名詞,代名詞,一般,*,*,*,これ,コレ,コレ
。\t記号,句点,*,*,*,*,。,。,。
なん\t名詞,代名詞,一般,*,*,*,なん,ナン,ナン
や\t助詞,並立助詞,*,*,*,*,や,ヤ,ヤ
これ\t名詞,代名詞,一般,*,*,*,これ,コレ,コレ
。\t記号,句点,*,*,*,*,。,。,。
EOS
",
    ),
    (
        "パパ、ママ、父様、母様、パパ上、ママ上",
        "パパ\t名詞,一般,*,*,*,*,パパ,パパ,パパ
、\t記号,読点,*,*,*,*,、,、,、
ママ\t名詞,一般,*,*,*,*,ママ,ママ,ママ
、\t記号,読点,*,*,*,*,、,、,、
父\t名詞,一般,*,*,*,*,父,チチ,チチ
様\t名詞,接尾,人名,*,*,*,様,サマ,サマ
、\t記号,読点,*,*,*,*,、,、,、
母\t名詞,一般,*,*,*,*,母,ハハ,ハハ
様\t名詞,接尾,人名,*,*,*,様,サマ,サマ
、\t記号,読点,*,*,*,*,、,、,、
パパ\t名詞,一般,*,*,*,*,パパ,パパ,パパ
上\t名詞,接尾,一般,*,*,*,上,ウエ,ウエ
、\t記号,読点,*,*,*,*,、,、,、
ママ\t名詞,一般,*,*,*,*,ママ,ママ,ママ
上\t名詞,接尾,一般,*,*,*,上,ウエ,ウエ
EOS
",
    ),
    (
        "追い剥ぎ、大型、大分、おろし金",
        "追い剥ぎ\t名詞,一般,*,*,*,*,追い剥ぎ,オイハギ,オイハギ
、\t記号,読点,*,*,*,*,、,、,、
大型\t名詞,一般,*,*,*,*,大型,オオガタ,オオガタ
、\t記号,読点,*,*,*,*,、,、,、
大分\t名詞,固有名詞,地域,一般,*,*,大分,オオイタ,オーイタ
、\t記号,読点,*,*,*,*,、,、,、
おろし金\t名詞,一般,*,*,*,*,おろし金,オロシガネ,オロシガネ
EOS
",
    ),
    (
        "〇〇をプレイする。きたないわ。",
        "〇\t記号,一般,*,*,*,*,〇,〇,〇
〇\t記号,一般,*,*,*,*,〇,〇,〇
を\t助詞,格助詞,一般,*,*,*,を,ヲ,ヲ
プレイ\t名詞,サ変接続,*,*,*,*,プレイ,プレイ,プレイ
する\t動詞,自立,*,*,サ変・スル,基本形,する,スル,スル
。\t記号,句点,*,*,*,*,。,。,。
きたない\t形容詞,自立,*,*,形容詞・アウオ段,基本形,きたない,キタナイ,キタナイ
わ\t助詞,終助詞,*,*,*,*,わ,ワ,ワ
。\t記号,句点,*,*,*,*,。,。,。
EOS
",
    ),
    (
        "使用します",
        "使用\t名詞,サ変接続,*,*,*,*,使用,シヨウ,シヨウ
し\t動詞,自立,*,*,サ変・スル,連用形,する,シ,シ
ます\t助動詞,*,*,*,特殊・マス,基本形,ます,マス,マス
EOS
",
    ),
];

/// Serves [`FIXTURES`] as if MeCab had produced them.
pub struct FixtureTokenizer;

impl Tokenizer for FixtureTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        let (_, analysis) = FIXTURES
            .iter()
            .find(|(t, _)| *t == text)
            .ok_or_else(|| TokenizeError::Failed {
                status: "fixture".to_string(),
                stderr: format!("no analysis for {text:?}"),
            })?;
        align_with_source(text, parse_mecab(analysis)?)
    }
}

pub fn fixture_converter() -> Converter {
    Converter::with_builtin_rules(Box::new(FixtureTokenizer)).unwrap()
}

pub fn fixture_tokens(text: &str) -> Vec<Token> {
    FixtureTokenizer.tokenize(text).unwrap()
}

/// No kuten promotion, and a random source that always answers 0.
pub fn quiet_options() -> (ConvertOptions, SequenceRandom) {
    let options = ConvertOptions {
        disable_kuten_promotion: true,
        ..ConvertOptions::default()
    };
    (options, SequenceRandom::new(vec![0]))
}
