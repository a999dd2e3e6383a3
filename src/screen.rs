//! Screen routing for the programme client.
//!
//! The set of screens is a closed enum, so an unknown screen cannot exist
//! inside the application. Free-form screen names only enter through the
//! CLI, where [`Screen::resolve`] applies the documented home fallback.

use serde::{Deserialize, Serialize};

/// A named screen of the client.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Home,
    Treinos,
    Mentoria,
    Educacao,
    Oportunidades,
    Live,
    Biblioteca,
    Perfil,
    Tarefas,
}

impl Screen {
    /// Every screen, in presentation order.
    pub const ALL: [Screen; 9] = [
        Screen::Home,
        Screen::Treinos,
        Screen::Mentoria,
        Screen::Educacao,
        Screen::Oportunidades,
        Screen::Live,
        Screen::Biblioteca,
        Screen::Perfil,
        Screen::Tarefas,
    ];

    /// Route name used on the command line and in listings.
    pub fn name(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Treinos => "treinos",
            Screen::Mentoria => "mentoria",
            Screen::Educacao => "educacao",
            Screen::Oportunidades => "oportunidades",
            Screen::Live => "live",
            Screen::Biblioteca => "biblioteca",
            Screen::Perfil => "perfil",
            Screen::Tarefas => "tarefas",
        }
    }

    /// Header title shown at the top of the screen.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Basquete Social",
            Screen::Treinos => "Agenda de Treinos",
            Screen::Mentoria => "Mentoria Esportiva",
            Screen::Educacao => "Educação pelo Esporte",
            Screen::Oportunidades => "Oportunidades",
            Screen::Live => "Transmissões ao Vivo",
            Screen::Biblioteca => "Biblioteca",
            Screen::Perfil => "Meu Perfil",
            Screen::Tarefas => "Minhas Tarefas",
        }
    }

    /// Header subtitle shown under the title.
    pub fn subtitle(self) -> &'static str {
        match self {
            Screen::Home => "Escolha uma área para crescer com o esporte",
            Screen::Treinos => "Participe e evolua com a equipe",
            Screen::Mentoria => "Conecte-se com quem puxa você pra cima",
            Screen::Educacao => "Aprenda, lidere e inspire",
            Screen::Oportunidades => "Vagas, cursos e apoio pra você avançar",
            Screen::Live => "Treinos, torneios e entrevistas em tempo real",
            Screen::Biblioteca => "Conteúdos educativos e inspiradores",
            Screen::Perfil => "Henzo, atleta e mentor em formação",
            Screen::Tarefas => "Organize seus treinos e compromissos",
        }
    }

    /// Resolve a route name from the command line.
    ///
    /// Matching is case-insensitive. An unrecognized name is tolerated and
    /// resolves to the home screen with a logged warning.
    pub fn resolve(target: &str) -> Screen {
        let wanted = target.trim().to_lowercase();
        Screen::ALL
            .into_iter()
            .find(|s| s.name() == wanted)
            .unwrap_or_else(|| {
                tracing::warn!(name = target, "unknown screen name, opening home");
                Screen::Home
            })
    }
}

/// Holds the single current-screen value.
///
/// `navigate` replaces it unconditionally; there is no history stack and no
/// transition queue. A second navigation before the previous screen finished
/// drawing simply restarts the destination's render.
#[derive(Debug, Clone, Copy)]
pub struct Router {
    current: Screen,
}

impl Router {
    pub fn new(start: Screen) -> Self {
        Router { current: start }
    }

    pub fn current(self) -> Screen {
        self.current
    }

    /// Replace the current screen with the target.
    pub fn navigate(&mut self, target: Screen) {
        tracing::debug!(from = self.current.name(), to = target.name(), "navigate");
        self.current = target;
    }

    /// Shortcut for the back action every screen offers.
    pub fn go_home(&mut self) {
        self.navigate(Screen::Home);
    }
}
