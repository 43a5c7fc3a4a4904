#![allow(dead_code)]

use lowpayout::types::{Ticket, TicketPool};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn pool_from(rows: &[[u8; 7]]) -> TicketPool {
    TicketPool::new(
        rows.iter()
            .enumerate()
            .map(|(i, r)| Ticket::new(i, r).unwrap())
            .collect(),
    )
}

/// `count` random tickets drawn from 1..=`max_number`
pub fn random_pool(count: usize, max_number: u8, seed: u64) -> TicketPool {
    let mut rng = StdRng::seed_from_u64(seed);
    let tickets = (0..count)
        .map(|i| {
            let picks = rand::seq::index::sample(&mut rng, max_number as usize, 7);
            let numbers: Vec<u8> = picks.iter().map(|n| n as u8 + 1).collect();
            Ticket::new(i, &numbers).unwrap()
        })
        .collect();
    TicketPool::new(tickets)
}
