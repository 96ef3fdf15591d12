//! Trait-level proofs for the MaxHeap interface
//!
//! These proofs check the contract every arity has to honor, driven through
//! the `MaxHeap` trait.

#[cfg(kani)]
use power_of_two_heap::{HeapError, MaxHeap, PowerOfTwoHeap};

/// Proof: is_empty() is consistent with len() == 0
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_is_empty_consistent() {
    let exponent: i32 = kani::any();
    kani::assume((0..=3).contains(&exponent));

    let mut heap: PowerOfTwoHeap<u32> = PowerOfTwoHeap::new(exponent).unwrap();
    assert!(MaxHeap::is_empty(&heap) == (MaxHeap::len(&heap) == 0));

    MaxHeap::insert(&mut heap, kani::any());
    assert!(!MaxHeap::is_empty(&heap));
    assert!(MaxHeap::len(&heap) == 1);
}

/// Proof: construction succeeds exactly for exponents in 0..=10
#[cfg(kani)]
#[kani::proof]
fn verify_construction_bounds() {
    let exponent: i32 = kani::any();
    match PowerOfTwoHeap::<u32>::new(exponent) {
        Ok(heap) => {
            assert!((0..=10).contains(&exponent));
            assert!(heap.num_children() == 1usize << exponent);
            assert!(heap.is_empty());
        }
        Err(err) => {
            assert!(!(0..=10).contains(&exponent));
            assert!(err == HeapError::InvalidArgument { branching_exponent: exponent });
        }
    }
}

/// Proof: pop_max on an empty heap fails and leaves it empty
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_empty_pop_is_error() {
    let mut heap: PowerOfTwoHeap<u32> = PowerOfTwoHeap::new(1).unwrap();
    assert!(MaxHeap::pop_max(&mut heap) == Err(HeapError::EmptyHeap));
    assert!(MaxHeap::len(&heap) == 0);
}

/// Proof: pop_max returns the maximum and shrinks the heap by one
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_pop_returns_max() {
    let exponent: i32 = kani::any();
    kani::assume((0..=2).contains(&exponent));
    let mut heap: PowerOfTwoHeap<u32> = PowerOfTwoHeap::new(exponent).unwrap();

    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();
    MaxHeap::insert(&mut heap, a);
    MaxHeap::insert(&mut heap, b);
    MaxHeap::insert(&mut heap, c);

    let popped = MaxHeap::pop_max(&mut heap).unwrap();
    assert!(popped >= a && popped >= b && popped >= c);
    assert!(popped == a || popped == b || popped == c);
    assert!(MaxHeap::len(&heap) == 2);
}
