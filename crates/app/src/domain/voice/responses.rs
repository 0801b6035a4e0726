//! Canned voice responses.
//!
//! Static lookup tables keyed by language and category. An unsupported
//! language falls back to [`DEFAULT_LANGUAGE`]; a category missing for a
//! language falls back to that language's default entry.

use crate::domain::voice::classify::ResponseCategory;

/// Language used when the requested one is unsupported.
pub const DEFAULT_LANGUAGE: &str = "en-ng";

/// A canned response and its audio reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedResponse {
    pub text: &'static str,
    pub audio_file: &'static str,
}

struct LanguagePack {
    code: &'static str,
    default: CannedResponse,
    entries: &'static [(ResponseCategory, CannedResponse)],
}

static EN_NG: LanguagePack = LanguagePack {
    code: "en-ng",
    default: CannedResponse {
        text: "I understand you want to know more about your data privacy. In Nigeria, organizations must get your clear consent before using your personal data. You have the right to know what data they collect, why they need it, and how long they keep it.",
        audio_file: "en_ng_default.mp3",
    },
    entries: &[
        (
            ResponseCategory::ExplainAccess,
            CannedResponse {
                text: "When an organization accesses your data, they should have a valid reason that you previously agreed to. For example, banks access your transaction history to verify your identity for loans, which helps prevent fraud and ensures you qualify for the right financial products.",
                audio_file: "en_ng_explain.mp3",
            },
        ),
        (
            ResponseCategory::ConsentRights,
            CannedResponse {
                text: "Your consent rights in Nigeria include: the right to be informed about data collection, the right to access your data, the right to correct wrong information, the right to delete your data, and the right to withdraw consent at any time.",
                audio_file: "en_ng_rights.mp3",
            },
        ),
        (
            ResponseCategory::BankingData,
            CannedResponse {
                text: "Banks need your financial data to assess your creditworthiness and comply with Central Bank of Nigeria regulations. They use your transaction history to understand your spending patterns and determine if you can repay loans safely.",
                audio_file: "en_ng_banking.mp3",
            },
        ),
        (
            ResponseCategory::TelecomData,
            CannedResponse {
                text: "Telecommunications companies like MTN collect your usage data to improve network quality and provide better services. They also use location data to optimize network coverage in your area.",
                audio_file: "en_ng_telecom.mp3",
            },
        ),
    ],
};

static IG: LanguagePack = LanguagePack {
    code: "ig",
    default: CannedResponse {
        text: "Aghọtara m na ịchọrọ ịmata ihe gbasara nchekwa data gị. Na Naịjirịa, ụlọ ọrụ ga-enweta nkwenye gị doro anya tupu ha eji data nkeonwe gị mee ihe.",
        audio_file: "ig_default.mp3",
    },
    entries: &[
        (
            ResponseCategory::ExplainAccess,
            CannedResponse {
                text: "Mgbe ụlọ ọrụ na-enweta data gị, ha kwesịrị inwe ezigbo ihe kpatara ya nke ị kwenyere na mbụ. Dịka ọmụmaatụ, ụlọ akụ na-elele akụkọ ego gị iji chọpụta onye ị bụ maka mbinye ego.",
                audio_file: "ig_explain.mp3",
            },
        ),
        (
            ResponseCategory::ConsentRights,
            CannedResponse {
                text: "Ikike nkwenye gị na Naịjirịa gụnyere: ikike ịmata mgbe a na-anakọta data gị, ikike ịnweta data gị, ikike imezi ozi ezighi ezi, ikike ihichapụ data gị, na ikike ịkwụsị nkwenye mgbe ọ bụla.",
                audio_file: "ig_rights.mp3",
            },
        ),
    ],
};

static YO: LanguagePack = LanguagePack {
    code: "yo",
    default: CannedResponse {
        text: "Mo ye mi pe o fe mo nipa aabo data re. Ni Nigeria, awon ile-ise gbodo gba igbanilaaye to han kedere lati odo re ki won to lo data ti ara re.",
        audio_file: "yo_default.mp3",
    },
    entries: &[
        (
            ResponseCategory::ExplainAccess,
            CannedResponse {
                text: "Nigbati ile-ise kan ba n wole si data re, won gbodo ni idi to dara ti o ti gba lati tele. Fun apere, awon ile-owo n wo itan owo re lati ri daju pe eni ti o je fun awin owo.",
                audio_file: "yo_explain.mp3",
            },
        ),
        (
            ResponseCategory::ConsentRights,
            CannedResponse {
                text: "Awon eto re nipa igbanilaaye ni Nigeria ni: eto lati mo nigbati won ba n gba data re, eto lati ri data re, eto lati se atunse alaye ti ko tọ, eto lati pa data re rẹ, ati eto lati fa igbanilaaye re pada nigbakugba.",
                audio_file: "yo_rights.mp3",
            },
        ),
    ],
};

static HA: LanguagePack = LanguagePack {
    code: "ha",
    default: CannedResponse {
        text: "Na fahimci kana son ka san game da kare bayananku. A Najeriya, kamfanoni dole su sami izininku da bayyane kafin su yi amfani da bayananku na sirri.",
        audio_file: "ha_default.mp3",
    },
    entries: &[
        (
            ResponseCategory::ExplainAccess,
            CannedResponse {
                text: "Lokacin da kamfani ya shiga bayananku, ya kamata su sami dalili mai kyau da kuka yarda da shi a baya. Misali, bankuna suna kallon tarihin kuɗin ku don tabbatar da ko kun cancanci rancen da kuke nema.",
                audio_file: "ha_explain.mp3",
            },
        ),
        (
            ResponseCategory::ConsentRights,
            CannedResponse {
                text: "Hakokinku na yarda a Najeriya sun haɗa da: hakin sanin lokacin da ake tattara bayananku, hakin samun bayananku, hakin gyara bayanan da ba daidai ba, hakin share bayananku, da hakin janye yardan ku kowane lokaci.",
                audio_file: "ha_rights.mp3",
            },
        ),
    ],
};

static PACKS: &[&LanguagePack] = &[&EN_NG, &IG, &YO, &HA];

fn pack_for(language: &str) -> &'static LanguagePack {
    PACKS
        .iter()
        .find(|pack| pack.code == language)
        .copied()
        .unwrap_or(&EN_NG)
}

/// Look up the canned response for a language and category, applying both
/// fallbacks.
#[must_use]
pub fn canned_response(language: &str, category: ResponseCategory) -> CannedResponse {
    let pack = pack_for(language);

    pack.entries
        .iter()
        .find(|(candidate, _)| *candidate == category)
        .map_or(pack.default, |(_, response)| *response)
}

/// A supported voice language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

/// Languages the adapter ships responses for.
pub static SUPPORTED_LANGUAGES: &[Language] = &[
    Language { code: "en-ng", name: "Nigerian English", native_name: "Nigerian English" },
    Language { code: "ig", name: "Igbo", native_name: "Igbo" },
    Language { code: "yo", name: "Yoruba", native_name: "Yorùbá" },
    Language { code: "ha", name: "Hausa", native_name: "Hausa" },
];

/// A demo prompt with the category it is expected to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoPrompt {
    pub text: &'static str,
    pub expected_type: ResponseCategory,
    pub languages: &'static [&'static str],
}

const ALL_LANGUAGES: &[&str] = &["en-ng", "ig", "yo", "ha"];

/// Prompts exposed by the demo-prompts endpoint.
pub static DEMO_PROMPTS: &[DemoPrompt] = &[
    DemoPrompt {
        text: "Why did First Bank Nigeria access my transaction history?",
        expected_type: ResponseCategory::BankingData,
        languages: ALL_LANGUAGES,
    },
    DemoPrompt {
        text: "Explain why MTN accessed my usage data",
        expected_type: ResponseCategory::TelecomData,
        languages: ALL_LANGUAGES,
    },
    DemoPrompt {
        text: "What are my consent rights in Nigeria?",
        expected_type: ResponseCategory::ConsentRights,
        languages: ALL_LANGUAGES,
    },
    DemoPrompt {
        text: "Tell me about data privacy",
        expected_type: ResponseCategory::Default,
        languages: ALL_LANGUAGES,
    },
];
