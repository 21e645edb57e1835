pub mod auth;
pub mod aluno;
pub mod pagamento;
pub mod presenca;
pub mod evento;
pub mod graduacao;
pub mod bracket;

pub use auth::{AtivarContaRequest, LoginRequest, LoginResponse, OnboardRequest, Session, Usuario};
pub use aluno::{Aluno, AlunoCreate, AlunoUpdate, CandidatoGraduacao, GraduarRequest, MeuProgresso};
pub use pagamento::{Pagamento, PagamentoCreate, PagamentoStatus, PixQrCode};
pub use presenca::{PresencaBulkRequest, PresencaItem};
pub use evento::{
    Categoria, CategoriaCreate, Evento, EventoCreate, EventoTipo, GerarChavesRequest,
    InscricaoExternaRequest, InscricaoRequest, InscricaoResponse, MessageResponse,
};
pub use graduacao::Graduacao;
pub use bracket::{Atleta, BracketLayout, CompetitorRow, Luta, MatchCard};
