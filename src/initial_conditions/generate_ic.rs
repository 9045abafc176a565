use crate::domain::*;
use crate::error::*;
use crate::initial_conditions::impulse::*;
use crate::initial_conditions::normal_impulse::*;
use crate::initial_conditions::rand::*;
use crate::initial_conditions::*;
use crate::par_slice;

/// Write the initial condition into the interior, ghost cells stay zero.
pub fn generate_ic(
    field: &mut Field,
    ic_type: ICType,
    chunk_size: usize,
) -> StencilResult<()> {
    if chunk_size == 0 {
        return Err(StencilError::InvalidChunkSize);
    }
    profiling::scope!("generate_ic");
    match ic_type {
        ICType::Zero => {
            par_slice::set_value(field.interior_mut(), 0.0, chunk_size);
            Ok(())
        }
        ICType::Impulse { index, value } => impulse_ic(field, index, value),
        ICType::Normal { variance } => normal_ic_1d(field, variance, chunk_size),
        ICType::Rand { max_val, seed } => {
            rand_ic(field, max_val, seed, chunk_size)
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn generate_test() {
        let mut f = Field::new(6).unwrap();
        generate_ic(&mut f, ICType::default(), 2).unwrap();
        assert_eq!(f.buffer(), &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);

        generate_ic(&mut f, ICType::Zero, 2).unwrap();
        assert!(f.buffer().iter().all(|v| *v == 0.0));

        assert!(matches!(
            generate_ic(&mut f, ICType::Zero, 0),
            Err(StencilError::InvalidChunkSize)
        ));
    }
}
