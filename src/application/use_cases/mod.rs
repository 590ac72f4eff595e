/// Use cases module containing application business logic orchestration
mod generate_view;

pub use generate_view::GenerateViewUseCase;
