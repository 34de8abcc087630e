//! Scripture text shipped inside the binary. Declaration order matters: the
//! first translation is the primary one and the selector lists them in this
//! order.

use crate::models::{Book, Translation};

struct RawBook {
    code: &'static str,
    name: &'static str,
    chapters: &'static [&'static [&'static str]],
}

struct RawTranslation {
    name: &'static str,
    code: &'static str,
    books: &'static [RawBook],
}

const NVI: RawTranslation = RawTranslation {
    name: "Nova Versão Internacional",
    code: "NVI",
    books: &[
        RawBook {
            code: "jo",
            name: "João",
            chapters: &[&[
                "Porque Deus tanto amou o mundo que deu o seu Filho unigênito, para que todo aquele que nele crê não pereça, mas tenha a vida eterna.",
                "Pois Deus enviou o seu Filho ao mundo, não para condenar o mundo, mas para que este fosse salvo por meio dele.",
                "Quem nele crê não é condenado, mas quem não crê já está condenado, por não crer no nome do Filho unigênito de Deus.",
            ]],
        },
        RawBook {
            code: "sl",
            name: "Salmos",
            chapters: &[
                &[
                    "O SENHOR é o meu pastor; nada me faltará.",
                    "Deitar-me faz em verdes pastos, guia-me mansamente a águas tranquilas.",
                    "Refrigera a minha alma; guia-me pelas veredas da justiça por amor do seu nome.",
                ],
                &[
                    "Lâmpada para os meus pés é a tua palavra e luz para o meu caminho.",
                    "Jurei, e o cumprirei, que guardarei os teus justos juízos.",
                ],
                &[
                    "Aquietai-vos e sabei que eu sou Deus; sou exaltado entre as nações; sou exaltado na terra.",
                    "O SENHOR dos Exércitos está conosco; o Deus de Jacó é o nosso refugio.",
                ],
            ],
        },
        RawBook {
            code: "fp",
            name: "Filipenses",
            chapters: &[&[
                "Tudo posso naquele que me fortalece.",
                "Alegrai-vos sempre no Senhor; outra vez digo: alegrai-vos!",
                "E a paz de Deus, que excede todo o entendimento, guardará os vossos corações e os vossos sentimentos em Cristo Jesus.",
            ]],
        },
        RawBook {
            code: "pv",
            name: "Provérbios",
            chapters: &[
                &[
                    "Confia no SENHOR de todo o teu coração e não te estribes no teu próprio entendimento.",
                    "Reconhece-o em todos os teus caminhos, e ele endireitará as tuas veredas.",
                ],
                &["Entrega o teu caminho ao SENHOR; confia nele, e ele o fará."],
            ],
        },
        RawBook {
            code: "jr",
            name: "Jeremias",
            chapters: &[&[
                "Porque eu bem sei os pensamentos que tenho a vosso respeito, diz o SENHOR; pensamentos de paz e não de mal, para vos dar o fim que esperais.",
                "Então me invocareis, e ireis, e orareis a mim, e eu vos ouvirei.",
            ]],
        },
        RawBook {
            code: "mt",
            name: "Mateus",
            chapters: &[
                &[
                    "Vinde a mim, todos os que estais cansados e oprimidos, e eu vos aliviarei.",
                    "Tomai sobre vós o meu jugo, e aprendei de mim, que sou manso e humilde de coração; e encontrareis descanso para as vossas almas.",
                ],
                &[
                    "Buscai primeiro o Reino de Deus, e a sua justiça, e todas essas coisas vos serão acrescentadas.",
                    "Porque onde estiver o vosso tesouro, aí estará também o vosso coração.",
                ],
            ],
        },
        RawBook {
            code: "rm",
            name: "Romanos",
            chapters: &[&[
                "E sabemos que todas as coisas contribuem juntamente para o bem daqueles que amam a Deus, daqueles que são chamados por seu decreto.",
                "Porque o salário do pecado é a morte, mas o dom gratuito de Deus é a vida eterna, por Cristo Jesus, nosso Senhor.",
            ]],
        },
        RawBook {
            code: "is",
            name: "Isaías",
            chapters: &[&[
                "Não temas, porque eu sou contigo; não te assombres, porque eu sou o teu Deus; eu te fortaleço, e te ajudo, e te sustento com a destra da minha justiça.",
                "Mas os que esperam no SENHOR renovarão as suas forças, subirão com asas como águias; correrão e não se cansarão; caminharão e não se fatigarão.",
                "Porque eu sou o SENHOR, teu Deus, que te toma pela tua mão direita e te diz: Não temas, que eu te ajudo.",
            ]],
        },
        RawBook {
            code: "ef",
            name: "Efésios",
            chapters: &[&[
                "Porque pela graça sois salvos, por meio da fé; e isso não vem de vós; é dom de Deus.",
                "Não vem das obras, para que ninguém se glorie.",
            ]],
        },
        RawBook {
            code: "1jo",
            name: "1 João",
            chapters: &[&[
                "Se confessarmos os nossos pecados, ele é fiel e justo para nos perdoar os pecados e nos purificar de toda injustiça.",
                "Se dissermos que não pecamos, fazemo-lo mentiroso, e a sua palavra não está em nós.",
            ]],
        },
    ],
};

const ACF: RawTranslation = RawTranslation {
    name: "Almeida Corrigida e Fiel",
    code: "ACF",
    books: &[
        RawBook {
            code: "sl",
            name: "Salmos",
            chapters: &[&[
                "O SENHOR é o meu pastor; nada me faltará.",
                "Deitar-me faz em verdes pastos, guia-me mansamente a águas tranquilas.",
            ]],
        },
        RawBook {
            code: "jo",
            name: "João",
            chapters: &[&[
                "Porque Deus amou o mundo de tal maneira que deu o seu Filho unigênito, para que todo aquele que nele crê não pereça, mas tenha a vida eterna.",
            ]],
        },
    ],
};

const TRANSLATIONS: &[RawTranslation] = &[NVI, ACF];

/// Materialize the bundled tables into owned corpus types.
pub(crate) fn translations() -> Vec<Translation> {
    TRANSLATIONS
        .iter()
        .map(|raw| Translation {
            name: raw.name.to_string(),
            code: raw.code.to_string(),
            books: raw
                .books
                .iter()
                .map(|book| Book {
                    code: book.code.to_string(),
                    name: book.name.to_string(),
                    chapters: book
                        .chapters
                        .iter()
                        .map(|chapter| chapter.iter().map(|verse| verse.to_string()).collect())
                        .collect(),
                })
                .collect(),
        })
        .collect()
}
