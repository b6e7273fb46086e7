// crates/loms/src/infrastructure/api/mappers/mod.rs

mod order_dto_mapper;
