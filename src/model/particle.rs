#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BondDescriptor {
    pub bond_type: usize,
    pub partner: usize,
}

impl BondDescriptor {
    pub fn new(bond_type: usize, partner: usize) -> Self {
        Self { bond_type, partner }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub position: [f64; 3],
    pub force: [f64; 3],
    pub bonds: Vec<BondDescriptor>,
}

impl Particle {
    pub fn new(id: usize, position: [f64; 3]) -> Self {
        Self {
            id,
            position,
            force: [0.0; 3],
            bonds: Vec::new(),
        }
    }

    #[inline]
    pub fn add_force(&mut self, f: [f64; 3]) {
        self.force[0] += f[0];
        self.force[1] += f[1];
        self.force[2] += f[2];
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub particles: Vec<Particle>,
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a particle and returns its id (equal to its index).
    pub fn add_particle(&mut self, position: [f64; 3]) -> usize {
        let id = self.particles.len();
        self.particles.push(Particle::new(id, position));
        id
    }

    /// Records a pair bond of the given type. The descriptor is stored on the
    /// first particle only; the partner learns about the bond when the force
    /// phase evaluates it.
    pub fn add_bond(&mut self, p1: usize, p2: usize, bond_type: usize) {
        self.particles[p1].bonds.push(BondDescriptor::new(bond_type, p2));
    }

    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.particles.iter().map(Particle::bond_count).sum()
    }
}
