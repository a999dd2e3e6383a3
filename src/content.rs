//! Static programme content rendered by the informational screens.
//!
//! The catalogue mirrors the programme's published material. Entries are
//! plain records so the CLI can emit them as JSON with `content --json`.

use serde::Serialize;

use crate::screen::Screen;

/// A card on an informational screen.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InfoEntry {
    pub title: &'static str,
    pub desc: &'static str,
}

/// A home-screen category tile and its destination.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryEntry {
    pub name: &'static str,
    pub screen: Screen,
}

/// A featured story on the home screen.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub desc: &'static str,
}

/// A titled group of cards within a screen.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub entries: &'static [InfoEntry],
}

/// Home-screen category grid.
pub const CATEGORIES: [CategoryEntry; 4] = [
    CategoryEntry { name: "Treinos", screen: Screen::Treinos },
    CategoryEntry { name: "Mentoria", screen: Screen::Mentoria },
    CategoryEntry { name: "Oportunidades", screen: Screen::Oportunidades },
    CategoryEntry { name: "Educação", screen: Screen::Educacao },
];

/// Home-screen featured stories.
pub const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "História de Lucas",
        desc: "De periferia à liderança nas quadras.",
    },
    Highlight {
        title: "Nova turma de fundamentos",
        desc: "Inscrições abertas para jovens atletas.",
    },
    Highlight {
        title: "Mentoria: Ana B.",
        desc: "Mentora que faz o jogo e a vida acontecer.",
    },
];

const TREINOS: [Section; 2] = [
    Section {
        title: "Próximos treinos",
        entries: &[
            InfoEntry { title: "Fundamentos", desc: "20/11 às 10h, Quadra Central" },
            InfoEntry { title: "Tático", desc: "22/11 às 14h, Ginásio Municipal" },
            InfoEntry { title: "Condicionamento", desc: "25/11 às 16h, Academia Parceira" },
        ],
    },
    Section {
        title: "Sugestões de rotina",
        entries: &[
            InfoEntry { title: "Fortalecimento", desc: "3x por semana, foco core e membros inferiores" },
            InfoEntry { title: "Alongamentos", desc: "10 minutos pré e pós treino" },
        ],
    },
];

const MENTORIA: [Section; 2] = [
    Section {
        title: "Mentores e sessões",
        entries: &[
            InfoEntry { title: "Ana Beatriz", desc: "Mentora em liderança esportiva" },
            InfoEntry { title: "Gabriel Santos", desc: "Aluno aguardando confirmação" },
            InfoEntry { title: "Sessão 01/07 às 11:00", desc: "Starbucks, Av. Paulista" },
        ],
    },
    Section {
        title: "Próximos passos",
        entries: &[
            InfoEntry { title: "Confirmação", desc: "Aguardando confirmação do aluno" },
            InfoEntry { title: "Local", desc: "Starbucks, Av. Paulista" },
        ],
    },
];

const EDUCACAO: [Section; 2] = [
    Section {
        title: "Cursos e bolsas",
        entries: &[
            InfoEntry { title: "Curso de Liderança", desc: "Formação para jovens líderes esportivos" },
            InfoEntry { title: "Bolsas de Estudo", desc: "Parcerias com escolas e universidades" },
            InfoEntry { title: "Projeto de Pesquisa", desc: "Basquete e cidadania" },
        ],
    },
    Section {
        title: "Projetos e estudos",
        entries: &[
            InfoEntry { title: "Mentoria acadêmica", desc: "Orientação para conciliar estudos e treino" },
            InfoEntry { title: "Trilhas de leitura", desc: "Seleção de textos para lideranças" },
        ],
    },
];

const OPORTUNIDADES: [Section; 2] = [
    Section {
        title: "Acesso a oportunidades",
        entries: &[
            InfoEntry { title: "Monitor de Quadra", desc: "ONG Esporte+ está contratando" },
            InfoEntry { title: "Curso de Treinamento", desc: "Capacitação para jovens líderes" },
            InfoEntry { title: "Atendimento Saúde", desc: "Fisioterapia gratuita para atletas" },
        ],
    },
    Section {
        title: "Parcerias e benefícios",
        entries: &[
            InfoEntry { title: "ONGs e empresas", desc: "Parceiros que acreditam no poder do esporte" },
            InfoEntry { title: "Auxílio transporte", desc: "Apoio para deslocamento aos treinos" },
        ],
    },
];

const LIVE: [Section; 2] = [
    Section {
        title: "Lives",
        entries: &[
            InfoEntry { title: "Torneio Sub-18", desc: "Hoje às 18h, transmissão ao vivo" },
            InfoEntry { title: "Entrevista c/ Mentor", desc: "Amanhã às 20h, live exclusiva" },
        ],
    },
    Section {
        title: "Agenda",
        entries: &[
            InfoEntry { title: "Calendário", desc: "Confira as próximas transmissões" },
        ],
    },
];

const BIBLIOTECA: [Section; 2] = [
    Section {
        title: "Conteúdos",
        entries: &[
            InfoEntry { title: "Ebook: Basquete e Cidadania", desc: "O esporte como ferramenta social" },
            InfoEntry { title: "Podcast: Superação", desc: "Vozes que mudaram de vida nas quadras" },
            InfoEntry { title: "Documentário", desc: "Histórias reais de transformação" },
        ],
    },
    Section {
        title: "Playlists e leituras",
        entries: &[
            InfoEntry { title: "Favoritos", desc: "Salve o que te inspira" },
        ],
    },
];

const PERFIL: [Section; 2] = [
    Section {
        title: "Informações",
        entries: &[
            InfoEntry { title: "Local", desc: "Presidente Venceslau, SP" },
            InfoEntry { title: "Participações", desc: "12 treinos, 3 mentorias" },
            InfoEntry { title: "Objetivo", desc: "Inspirar jovens com o esporte" },
            InfoEntry { title: "Conquistas", desc: "Campeão regional Sub-18" },
        ],
    },
    Section {
        title: "Metas",
        entries: &[
            InfoEntry { title: "Compromissos", desc: "Treinar 4x por semana, foco em fundamentos" },
        ],
    },
];

/// Card sections for a screen. Home and the task board have none; their
/// bodies are built from [`CATEGORIES`]/[`HIGHLIGHTS`] and the live list.
pub fn sections(screen: Screen) -> &'static [Section] {
    match screen {
        Screen::Treinos => &TREINOS,
        Screen::Mentoria => &MENTORIA,
        Screen::Educacao => &EDUCACAO,
        Screen::Oportunidades => &OPORTUNIDADES,
        Screen::Live => &LIVE,
        Screen::Biblioteca => &BIBLIOTECA,
        Screen::Perfil => &PERFIL,
        Screen::Home | Screen::Tarefas => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tiles_cover_the_four_programme_areas() {
        let targets: Vec<Screen> = CATEGORIES.iter().map(|c| c.screen).collect();
        assert_eq!(
            targets,
            vec![Screen::Treinos, Screen::Mentoria, Screen::Oportunidades, Screen::Educacao]
        );
    }

    #[test]
    fn every_informational_screen_has_content() {
        for screen in Screen::ALL {
            match screen {
                Screen::Home | Screen::Tarefas => assert!(sections(screen).is_empty()),
                _ => {
                    assert!(!sections(screen).is_empty(), "{} has no sections", screen.name());
                    for section in sections(screen) {
                        assert!(!section.entries.is_empty());
                    }
                }
            }
        }
    }
}
